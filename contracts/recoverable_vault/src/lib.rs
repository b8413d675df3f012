#![no_std]

//! # Recoverable Vault
//!
//! A single-owner vault holding a balance of one Stellar asset. The owner
//! moves value and calls other contracts freely through `transact`. If the
//! owner goes silent, a beneficiary the owner approved can post a bond and
//! start a recovery attempt. Unless the owner cancels within the timeout
//! window, anyone may finalize it and the beneficiary becomes the new owner.
//!
//! - **Bond**: the exact configured amount, pulled from the beneficiary and
//!   kept in the vault whatever the outcome.
//! - **Timeout**: evaluated against the current config on every check, so
//!   changing it reshapes an attempt already in flight.
//! - **One attempt at a time**: a second `start_recovery` is rejected until
//!   the first is cancelled or finalized.

pub mod events;
pub mod executor;
pub mod recovery;
pub mod storage;


use executor::Executor;
use recovery::{RecoveryAttempt, RecoveryConfig};
use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, Symbol, Val, Vec};

pub use recovery::{DEFAULT_RECOVERY_BOND, DEFAULT_RECOVERY_TIMEOUT};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VaultError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    OnlyOwner = 3,
    OnlyBeneficiary = 4,
    InsufficientBond = 5,
    AlreadyRecovering = 6,
    NoActiveRecovery = 7,
    TimeoutNotElapsed = 8,
    ExecutionFailed = 9,
    InvalidAmount = 10,
}

#[contract]
pub struct RecoverableVault;

#[contractimpl]
impl RecoverableVault {
    /// Bind the vault to its first owner and the asset it holds. Bond and
    /// timeout start at their defaults; no beneficiaries, no attempt.
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), VaultError> {
        if storage::is_initialized(&env) {
            return Err(VaultError::AlreadyInitialized);
        }
        owner.require_auth();

        storage::set_owner(&env, &owner);
        storage::set_token(&env, &token);
        storage::set_config(&env, &RecoveryConfig::default());
        storage::set_initialized(&env);
        storage::extend_instance_ttl(&env);

        events::emit_initialized(&env, owner, token);
        Ok(())
    }

    /// Accept value from anyone. A plain token transfer to the contract
    /// address is equivalent; this entry point just saves the caller a step.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), VaultError> {
        let token = Self::require_token(&env)?;
        from.require_auth();
        if amount < 0 {
            return Err(VaultError::InvalidAmount);
        }
        Executor::new(&env, token).collect(&from, amount);
        log!(&env, "deposit of {} received", amount);
        Ok(())
    }

    // ── Owner operations ─────────────────────────────────────────────────────

    /// Send `value` of the vault's asset to `destination` and, when
    /// `function` is set, invoke it there with `args`. Any failure of the
    /// nested call unwinds the entire invocation.
    pub fn transact(
        env: Env,
        caller: Address,
        destination: Address,
        value: i128,
        function: Option<Symbol>,
        args: Vec<Val>,
    ) -> Result<Val, VaultError> {
        Self::require_owner(&env, &caller)?;
        if value < 0 {
            return Err(VaultError::InvalidAmount);
        }
        let token = Self::require_token(&env)?;

        let result = Executor::new(&env, token).execute(&destination, value, function, args)?;
        storage::extend_instance_ttl(&env);
        events::emit_executed(&env, destination, value);
        Ok(result)
    }

    pub fn add_beneficiary(
        env: Env,
        caller: Address,
        beneficiary: Address,
    ) -> Result<(), VaultError> {
        Self::require_owner(&env, &caller)?;
        storage::add_beneficiary(&env, &beneficiary);
        storage::extend_instance_ttl(&env);
        events::emit_beneficiary_changed(&env, beneficiary, true);
        Ok(())
    }

    pub fn remove_beneficiary(
        env: Env,
        caller: Address,
        beneficiary: Address,
    ) -> Result<(), VaultError> {
        Self::require_owner(&env, &caller)?;
        storage::remove_beneficiary(&env, &beneficiary);
        storage::extend_instance_ttl(&env);
        events::emit_beneficiary_changed(&env, beneficiary, false);
        Ok(())
    }

    /// Takes effect for the next `start_recovery`; a bond already collected
    /// stays where it is.
    pub fn set_recovery_bond(env: Env, caller: Address, amount: i128) -> Result<(), VaultError> {
        Self::require_owner(&env, &caller)?;
        if amount < 0 {
            return Err(VaultError::InvalidAmount);
        }
        let mut config = storage::get_config(&env);
        config.bond_amount = amount;
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);
        events::emit_bond_changed(&env, amount);
        Ok(())
    }

    /// Applies immediately, including to an attempt already running.
    pub fn set_recovery_timeout(
        env: Env,
        caller: Address,
        duration: u64,
    ) -> Result<(), VaultError> {
        Self::require_owner(&env, &caller)?;
        let mut config = storage::get_config(&env);
        config.timeout_duration = duration;
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);
        events::emit_timeout_changed(&env, duration);
        Ok(())
    }

    // ── Recovery ─────────────────────────────────────────────────────────────

    /// Open a recovery attempt. `bond` must equal the configured bond
    /// exactly and is pulled from the caller into the vault.
    pub fn start_recovery(env: Env, caller: Address, bond: i128) -> Result<(), VaultError> {
        let token = Self::require_token(&env)?;
        caller.require_auth();

        let config = storage::get_config(&env);
        let current = storage::get_recovery(&env);
        recovery::check_can_start(
            storage::is_beneficiary(&env, &caller),
            bond,
            &config,
            current.as_ref(),
        )?;

        Executor::new(&env, token).collect(&caller, bond);

        let now = env.ledger().timestamp();
        storage::set_recovery(
            &env,
            &RecoveryAttempt {
                recoverer: caller.clone(),
                started_at: now,
            },
        );
        storage::extend_instance_ttl(&env);

        log!(&env, "recovery started at {}, bond {}", now, bond);
        events::emit_recovery_started(&env, caller, bond);
        Ok(())
    }

    /// Drop the active attempt, if any. The bond stays in the vault, where
    /// the owner already controls it.
    pub fn cancel_recovery(env: Env, caller: Address) -> Result<(), VaultError> {
        Self::require_owner(&env, &caller)?;
        storage::clear_recovery(&env);
        storage::extend_instance_ttl(&env);
        log!(&env, "recovery cancelled");
        events::emit_recovery_cancelled(&env, caller);
        Ok(())
    }

    /// Promote the recoverer of a matured attempt to owner. Open to anyone.
    pub fn finalize_recovery(env: Env) -> Result<Address, VaultError> {
        let previous_owner = storage::get_owner(&env).ok_or(VaultError::NotInitialized)?;

        let config = storage::get_config(&env);
        let now = env.ledger().timestamp();
        let attempt = recovery::check_can_finalize(storage::get_recovery(&env), &config, now)?;

        storage::set_owner(&env, &attempt.recoverer);
        storage::clear_recovery(&env);
        storage::extend_instance_ttl(&env);

        log!(&env, "recovery finalized at {}", now);
        events::emit_recovery_finalized(&env, attempt.recoverer.clone(), previous_owner);
        Ok(attempt.recoverer)
    }

    // ── Views ────────────────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Result<Address, VaultError> {
        storage::get_owner(&env).ok_or(VaultError::NotInitialized)
    }

    pub fn token(env: Env) -> Result<Address, VaultError> {
        Self::require_token(&env)
    }

    pub fn is_beneficiary(env: Env, address: Address) -> bool {
        storage::is_beneficiary(&env, &address)
    }

    /// Config views never fail. Before `initialize` they report the defaults
    /// a new vault starts with; only owner, token and balance need a vault.
    pub fn recovery_bond(env: Env) -> i128 {
        storage::get_config(&env).bond_amount
    }

    pub fn recovery_timeout(env: Env) -> u64 {
        storage::get_config(&env).timeout_duration
    }

    pub fn get_config(env: Env) -> RecoveryConfig {
        storage::get_config(&env)
    }

    pub fn get_recovery(env: Env) -> Option<RecoveryAttempt> {
        storage::get_recovery(&env)
    }

    /// `None` when no attempt is active.
    pub fn recoverer(env: Env) -> Option<Address> {
        storage::get_recovery(&env).map(|attempt| attempt.recoverer)
    }

    /// Start time of the active attempt, `0` when there is none.
    pub fn recovery_start(env: Env) -> u64 {
        storage::get_recovery(&env).map_or(0, |attempt| attempt.started_at)
    }

    pub fn is_recovering(env: Env) -> bool {
        storage::get_recovery(&env).is_some()
    }

    pub fn timeout_completed(env: Env) -> bool {
        recovery::timeout_completed(
            storage::get_recovery(&env).as_ref(),
            &storage::get_config(&env),
            env.ledger().timestamp(),
        )
    }

    pub fn balance(env: Env) -> Result<i128, VaultError> {
        let token = Self::require_token(&env)?;
        Ok(Executor::new(&env, token).balance())
    }

    // ── Guards ───────────────────────────────────────────────────────────────

    fn require_token(env: &Env) -> Result<Address, VaultError> {
        storage::get_token(env).ok_or(VaultError::NotInitialized)
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), VaultError> {
        let owner = storage::get_owner(env).ok_or(VaultError::NotInitialized)?;
        caller.require_auth();
        recovery::check_owner(&owner, caller)
    }
}
