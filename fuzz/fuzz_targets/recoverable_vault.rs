#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env, Val, Vec as SorobanVec,
};
use recoverable_vault::{RecoverableVault, RecoverableVaultClient};

/// Actions modelling every vault entry point plus the clock.
///
/// `who` picks the caller from the address pool (index 0 is the first
/// owner). Values are narrow integers so the fuzzer reaches the exact-bond
/// and timeout boundaries often.
#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Deposit { who: u8, amount: u32 },
    Transact { who: u8, to: u8, value: u32 },
    AddBeneficiary { who: u8, beneficiary: u8 },
    RemoveBeneficiary { who: u8, beneficiary: u8 },
    SetBond { who: u8, amount: u16 },
    SetTimeout { who: u8, duration: u16 },
    StartRecovery { who: u8, bond: u16 },
    CancelRecovery { who: u8 },
    FinalizeRecovery,
    AdvanceTime { delta: u16 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_000);

    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(RecoverableVault, ());
    let client = RecoverableVaultClient::new(&env, &contract_id);

    let mut users = vec![];
    for _ in 0..5 {
        let u = Address::generate(&env);
        StellarAssetClient::new(&env, &token).mint(&u, &1_000_000_000_000i128);
        users.push(u);
    }

    if client.try_initialize(&users[0], &token).is_err() {
        return;
    }

    let no_args: SorobanVec<Val> = SorobanVec::new(&env);
    // what the vault should hold: deposits and bonds in, payouts out
    let mut custody: i128 = 0;

    for action in actions.into_iter() {
        let pick = |i: u8| users[i as usize % users.len()].clone();
        match action {
            FuzzAction::Deposit { who, amount } => {
                let amt = amount as i128;
                if client.try_deposit(&pick(who), &amt).is_ok() {
                    custody += amt;
                }
            }
            FuzzAction::Transact { who, to, value } => {
                let v = value as i128;
                if client
                    .try_transact(&pick(who), &pick(to), &v, &None, &no_args)
                    .is_ok()
                {
                    custody -= v;
                }
            }
            FuzzAction::AddBeneficiary { who, beneficiary } => {
                let _ = client.try_add_beneficiary(&pick(who), &pick(beneficiary));
            }
            FuzzAction::RemoveBeneficiary { who, beneficiary } => {
                let _ = client.try_remove_beneficiary(&pick(who), &pick(beneficiary));
            }
            FuzzAction::SetBond { who, amount } => {
                let _ = client.try_set_recovery_bond(&pick(who), &(amount as i128));
            }
            FuzzAction::SetTimeout { who, duration } => {
                let _ = client.try_set_recovery_timeout(&pick(who), &(duration as u64));
            }
            FuzzAction::StartRecovery { who, bond } => {
                let b = bond as i128;
                let before = client.recovery_bond();
                if client.try_start_recovery(&pick(who), &b).is_ok() {
                    assert_eq!(b, before, "INVARIANT VIOLATION: inexact bond accepted");
                    assert_eq!(client.recovery_start(), env.ledger().timestamp());
                    custody += b;
                }
            }
            FuzzAction::CancelRecovery { who } => {
                if client.try_cancel_recovery(&pick(who)).is_ok() {
                    assert!(!client.is_recovering());
                }
            }
            FuzzAction::FinalizeRecovery => {
                let matured = client.timeout_completed();
                let pending = client.recoverer();
                match client.try_finalize_recovery() {
                    Ok(Ok(new_owner)) => {
                        assert!(matured, "INVARIANT VIOLATION: finalized before timeout");
                        assert_eq!(Some(new_owner.clone()), pending);
                        assert_eq!(client.owner(), new_owner);
                    }
                    _ => assert!(!matured, "INVARIANT VIOLATION: matured attempt refused"),
                }
            }
            FuzzAction::AdvanceTime { delta } => {
                let ts = env.ledger().timestamp().saturating_add(delta as u64);
                env.ledger().set_timestamp(ts);
            }
        }

        // ── Post-action invariant checks ──
        let recovering = client.is_recovering();
        assert_eq!(recovering, client.recoverer().is_some());
        assert_eq!(recovering, client.get_recovery().is_some());
        if !recovering {
            assert_eq!(client.recovery_start(), 0);
            assert!(!client.timeout_completed());
        }
        assert!(client.recovery_bond() >= 0, "INVARIANT VIOLATION: negative bond");
        assert_eq!(client.balance(), custody, "INVARIANT VIOLATION: custody drifted");
        assert!(users.contains(&client.owner()), "INVARIANT VIOLATION: unknown owner");
    }
});
