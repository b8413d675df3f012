//! Outbound value transfer and cross-contract calls on the owner's behalf.
//!
//! Value is always the vault's balance in its configured token. A failed
//! nested call surfaces as `ExecutionFailed`; returning that error from the
//! entry point makes the host discard the whole frame, including any transfer
//! made earlier in the same invocation.

use soroban_sdk::{log, token, Address, Env, IntoVal, InvokeError, Symbol, Val, Vec};

use crate::VaultError;

pub struct Executor<'a> {
    env: &'a Env,
    token: Address,
}

impl<'a> Executor<'a> {
    pub fn new(env: &'a Env, token: Address) -> Self {
        Self { env, token }
    }

    /// Vault custody in the configured token.
    pub fn balance(&self) -> i128 {
        token::Client::new(self.env, &self.token).balance(&self.env.current_contract_address())
    }

    /// Pull `amount` from `from` into the vault. Zero moves nothing.
    pub fn collect(&self, from: &Address, amount: i128) {
        if amount == 0 {
            return;
        }
        token::Client::new(self.env, &self.token).transfer(
            from,
            &self.env.current_contract_address(),
            &amount,
        );
    }

    /// Send `value` to `destination`, then invoke `function(args)` on it if a
    /// function is given. Returns the callee's raw result, or void for a bare
    /// transfer.
    pub fn execute(
        &self,
        destination: &Address,
        value: i128,
        function: Option<Symbol>,
        args: Vec<Val>,
    ) -> Result<Val, VaultError> {
        if value > 0 {
            let client = token::Client::new(self.env, &self.token);
            let vault = self.env.current_contract_address();
            if client.balance(&vault) < value {
                log!(self.env, "transact: balance below {}", value);
                return Err(VaultError::ExecutionFailed);
            }
            client.transfer(&vault, destination, &value);
        }

        let function = match function {
            Some(function) => function,
            None => return Ok(().into_val(self.env)),
        };

        match self
            .env
            .try_invoke_contract::<Val, InvokeError>(destination, &function, args)
        {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(_)) | Err(_) => {
                log!(self.env, "transact: call to {} failed", function);
                Err(VaultError::ExecutionFailed)
            }
        }
    }
}
