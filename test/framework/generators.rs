//! # Property-Based Test Generators
//!
//! `proptest` strategies producing vault actions, configurations and bond
//! mutations.
//!
//! - Generators yield *semantic* values (bonds, durations, actor choices) so
//!   sequences reach real transitions instead of dying on decoding.
//! - Boundary values (0, 1, the 30-day default) are over-weighted; the
//!   timeout boundary is where the recovery state machine is most fragile.
//! - Owner-gated actions pick the current owner most of the time, so the
//!   explorer spends its budget past the `OnlyOwner` gate.

extern crate std;

use proptest::prelude::*;
use std::vec::Vec;

// ── Scalar Generators ────────────────────────────────────────────────────────

/// Token amounts biased toward edge cases.
///
/// Distribution:
///   10% → 0
///   10% → 1
///   10% → 10^15
///   70% → uniform in [1, 10^15]
pub fn amount_strategy() -> impl Strategy<Value = i128> {
    prop_oneof![
        1 => Just(0i128),
        1 => Just(1i128),
        1 => Just(1_000_000_000_000_000i128),   // 10^15
        7 => (1i128..=1_000_000_000_000_000i128),
    ]
}

pub fn positive_amount_strategy() -> impl Strategy<Value = i128> {
    prop_oneof![
        1 => Just(1i128),
        1 => Just(1_000_000_000_000_000i128),
        8 => (1i128..=1_000_000_000_000_000i128),
    ]
}

/// Amounts every amount-taking entry point must reject.
pub fn invalid_amount_strategy() -> impl Strategy<Value = i128> {
    prop_oneof![
        5 => Just(-1i128),
        3 => (-1_000_000i128..=-1i128),
        2 => Just(i128::MIN),
    ]
}

/// Bond configurations, including free recovery (0) and the 1-unit default.
pub fn bond_strategy() -> impl Strategy<Value = i128> {
    prop_oneof![
        1 => Just(0i128),
        1 => Just(1i128),
        3 => Just(10_000_000i128),              // default: 1 unit
        5 => (1i128..=1_000_000_000i128),
    ]
}

/// Offsets applied to the configured bond when starting recovery.
/// Zero (exact bond) is the only accepted value.
pub fn bond_delta_strategy() -> impl Strategy<Value = i128> {
    prop_oneof![
        6 => Just(0i128),
        1 => Just(-1i128),
        1 => Just(1i128),
        2 => (-1_000i128..=1_000i128),
    ]
}

/// Time durations in seconds.
pub fn duration_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        1 => Just(0u64),
        1 => Just(1u64),
        2 => (1u64..=3_600u64),         // up to 1 hour
        3 => (1u64..=86_400u64),        // up to 1 day
        2 => (1u64..=604_800u64),       // up to 1 week
        1 => Just(2_592_000u64),        // 30 days
    ]
}

/// Recovery timeout configurations.
pub fn timeout_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        2 => Just(0u64),
        3 => (1u64..=86_400u64),
        3 => (86_400u64..=2_592_000u64),
        2 => Just(2_592_000u64),        // default
    ]
}

pub fn timestamp_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        1 => Just(0u64),
        8 => (0u64..=31_536_000u64),    // up to 1 year of seconds
        1 => Just(u64::MAX / 2),
    ]
}

// ── Action Generators ────────────────────────────────────────────────────────

/// Who signs an owner-gated call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    /// Whoever owns the vault when the action runs.
    Owner,
    /// A user from the pool, selected by modular index.
    User(usize),
}

/// Every vault entry point plus time advancement.
///
/// `user_index` selects from a pool of test users (modular indexing). The
/// initial owner is not part of the pool.
#[derive(Debug, Clone)]
pub enum VaultAction {
    Deposit { user_index: usize, amount: i128 },
    /// Send `value` to a pool user with no call attached.
    Transact { actor: Actor, recipient_index: usize, value: i128 },
    AddBeneficiary { actor: Actor, user_index: usize },
    RemoveBeneficiary { actor: Actor, user_index: usize },
    SetBond { actor: Actor, amount: i128 },
    SetTimeout { actor: Actor, duration: u64 },
    /// Attach `configured bond + bond_delta`.
    StartRecovery { user_index: usize, bond_delta: i128 },
    CancelRecovery { actor: Actor },
    FinalizeRecovery,
    AdvanceTime { delta: u64 },
}

/// Mostly the real owner, sometimes an intruder from the pool.
pub fn actor_strategy(num_users: usize) -> impl Strategy<Value = Actor> {
    prop_oneof![
        4 => Just(Actor::Owner),
        1 => (0..num_users).prop_map(Actor::User),
    ]
}

/// Individual vault actions.
///
/// Weights favour the recovery path: beneficiary churn, starts, time
/// advancement and finalization are common; config changes are rare.
pub fn vault_action_strategy(num_users: usize) -> impl Strategy<Value = VaultAction> {
    let user_idx = 0..num_users;

    prop_oneof![
        8 => (user_idx.clone(), positive_amount_strategy())
            .prop_map(|(u, a)| VaultAction::Deposit { user_index: u, amount: a }),
        6 => (actor_strategy(num_users), user_idx.clone(), amount_strategy())
            .prop_map(|(actor, r, v)| VaultAction::Transact {
                actor,
                recipient_index: r,
                value: v,
            }),
        15 => (actor_strategy(num_users), user_idx.clone())
            .prop_map(|(actor, u)| VaultAction::AddBeneficiary { actor, user_index: u }),
        5 => (actor_strategy(num_users), user_idx.clone())
            .prop_map(|(actor, u)| VaultAction::RemoveBeneficiary { actor, user_index: u }),
        3 => (actor_strategy(num_users), bond_strategy())
            .prop_map(|(actor, a)| VaultAction::SetBond { actor, amount: a }),
        3 => (actor_strategy(num_users), timeout_strategy())
            .prop_map(|(actor, d)| VaultAction::SetTimeout { actor, duration: d }),
        20 => (user_idx.clone(), bond_delta_strategy())
            .prop_map(|(u, d)| VaultAction::StartRecovery { user_index: u, bond_delta: d }),
        6 => actor_strategy(num_users).prop_map(|actor| VaultAction::CancelRecovery { actor }),
        12 => Just(VaultAction::FinalizeRecovery),
        20 => duration_strategy().prop_map(|d| VaultAction::AdvanceTime { delta: d }),
    ]
}

/// Sequences of 1–`max_len` vault actions.
pub fn vault_action_sequence(
    num_users: usize,
    max_len: usize,
) -> impl Strategy<Value = Vec<VaultAction>> {
    prop::collection::vec(vault_action_strategy(num_users), 1..=max_len)
}

// ── Vault Config Generators ──────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct VaultConfig {
    pub bond: i128,
    pub timeout: u64,
    pub num_users: usize,
}

pub fn vault_config_strategy() -> impl Strategy<Value = VaultConfig> {
    (bond_strategy(), timeout_strategy(), 1usize..=6usize).prop_map(
        |(bond, timeout, num_users)| VaultConfig {
            bond,
            timeout,
            num_users,
        },
    )
}

// ── Mutation Testing Support ─────────────────────────────────────────────────

/// A deliberate corruption of the bond a beneficiary attaches.
///
/// Every mutation must produce a value the contract rejects with
/// `InsufficientBond`, proving the equality check is exact in both
/// directions.
#[derive(Debug, Clone)]
pub enum Mutation {
    ZeroAmount,
    NegateAmount,
    MaxAmount,
    DoubleAmount,
    HalveAmount,
    OffByOne,
    OffByMinusOne,
}

pub fn mutation_strategy() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        Just(Mutation::ZeroAmount),
        Just(Mutation::NegateAmount),
        Just(Mutation::MaxAmount),
        Just(Mutation::DoubleAmount),
        Just(Mutation::HalveAmount),
        Just(Mutation::OffByOne),
        Just(Mutation::OffByMinusOne),
    ]
}

/// Apply a mutation to a (strictly positive, > 1) bond.
pub fn mutate_amount(amount: i128, mutation: &Mutation) -> i128 {
    match mutation {
        Mutation::ZeroAmount => 0,
        Mutation::NegateAmount => amount.checked_neg().unwrap_or(i128::MAX),
        Mutation::MaxAmount => i128::MAX,
        Mutation::DoubleAmount => amount.saturating_mul(2),
        Mutation::HalveAmount => amount / 2,
        Mutation::OffByOne => amount.saturating_add(1),
        Mutation::OffByMinusOne => amount.saturating_sub(1),
    }
}

// ── Historical Pattern Generators ────────────────────────────────────────────

/// Recovery situations seen in practice, as fixed action sequences.
#[derive(Debug, Clone)]
pub enum RecoveryPattern {
    /// Owner notices the attempt and cancels it inside the window.
    AttentiveOwner,
    /// Owner is gone; the heir waits out the timeout and takes over.
    SilentOwner,
    /// Two heirs race; the second is turned away until the first resolves.
    RacingHeirs,
    /// Owner stretches the timeout under a running attempt, then relents.
    TimeoutStretch,
    /// Heir is removed and re-added while attempts come and go.
    BeneficiaryChurn,
}

pub fn pattern_to_actions(pattern: &RecoveryPattern, num_users: usize) -> Vec<VaultAction> {
    let second = 1 % num_users.max(1);
    match pattern {
        RecoveryPattern::AttentiveOwner => vec![
            VaultAction::AddBeneficiary { actor: Actor::Owner, user_index: 0 },
            VaultAction::StartRecovery { user_index: 0, bond_delta: 0 },
            VaultAction::AdvanceTime { delta: 86_400 },
            VaultAction::FinalizeRecovery,
            VaultAction::CancelRecovery { actor: Actor::Owner },
            VaultAction::AdvanceTime { delta: 2_592_001 },
            VaultAction::FinalizeRecovery,
        ],
        RecoveryPattern::SilentOwner => vec![
            VaultAction::Deposit { user_index: 0, amount: 1_000_000 },
            VaultAction::AddBeneficiary { actor: Actor::Owner, user_index: 0 },
            VaultAction::StartRecovery { user_index: 0, bond_delta: 0 },
            VaultAction::AdvanceTime { delta: 2_592_000 },
            VaultAction::FinalizeRecovery,
            VaultAction::AdvanceTime { delta: 1 },
            VaultAction::FinalizeRecovery,
            VaultAction::Transact { actor: Actor::Owner, recipient_index: 0, value: 500_000 },
        ],
        RecoveryPattern::RacingHeirs => vec![
            VaultAction::AddBeneficiary { actor: Actor::Owner, user_index: 0 },
            VaultAction::AddBeneficiary { actor: Actor::Owner, user_index: second },
            VaultAction::StartRecovery { user_index: 0, bond_delta: 0 },
            VaultAction::StartRecovery { user_index: second, bond_delta: 0 },
            VaultAction::CancelRecovery { actor: Actor::Owner },
            VaultAction::StartRecovery { user_index: second, bond_delta: 0 },
            VaultAction::AdvanceTime { delta: 2_592_001 },
            VaultAction::FinalizeRecovery,
        ],
        RecoveryPattern::TimeoutStretch => vec![
            VaultAction::AddBeneficiary { actor: Actor::Owner, user_index: 0 },
            VaultAction::StartRecovery { user_index: 0, bond_delta: 0 },
            VaultAction::AdvanceTime { delta: 2_000_000 },
            VaultAction::SetTimeout { actor: Actor::Owner, duration: 31_536_000 },
            VaultAction::AdvanceTime { delta: 2_000_000 },
            VaultAction::FinalizeRecovery,
            VaultAction::SetTimeout { actor: Actor::Owner, duration: 60 },
            VaultAction::FinalizeRecovery,
        ],
        RecoveryPattern::BeneficiaryChurn => vec![
            VaultAction::AddBeneficiary { actor: Actor::Owner, user_index: 0 },
            VaultAction::RemoveBeneficiary { actor: Actor::Owner, user_index: 0 },
            VaultAction::StartRecovery { user_index: 0, bond_delta: 0 },
            VaultAction::AddBeneficiary { actor: Actor::Owner, user_index: 0 },
            VaultAction::AddBeneficiary { actor: Actor::Owner, user_index: 0 },
            VaultAction::StartRecovery { user_index: 0, bond_delta: 1 },
            VaultAction::StartRecovery { user_index: 0, bond_delta: 0 },
            VaultAction::RemoveBeneficiary { actor: Actor::Owner, user_index: 0 },
            VaultAction::AdvanceTime { delta: 2_592_001 },
            VaultAction::FinalizeRecovery,
        ],
    }
}

pub fn recovery_pattern_strategy() -> impl Strategy<Value = RecoveryPattern> {
    prop_oneof![
        Just(RecoveryPattern::AttentiveOwner),
        Just(RecoveryPattern::SilentOwner),
        Just(RecoveryPattern::RacingHeirs),
        Just(RecoveryPattern::TimeoutStretch),
        Just(RecoveryPattern::BeneficiaryChurn),
    ]
}
