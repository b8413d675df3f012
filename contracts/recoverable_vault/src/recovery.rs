//! Recovery state machine: configuration, the in-flight attempt record and the
//! ordered guard checks every recovery entry point runs before mutating state.
//!
//! Nothing here touches storage. The contract loads the current owner, config
//! and attempt, asks these helpers whether a transition is allowed, and only
//! then writes.
//!
//! | State                    | Leaves via                                   |
//! |--------------------------|----------------------------------------------|
//! | Normal (no attempt)      | `start_recovery` (beneficiary + exact bond)  |
//! | Recovering, pre-timeout  | `cancel_recovery` (owner)                    |
//! | Recovering, post-timeout | `cancel_recovery` (owner), `finalize_recovery` (anyone) |
//!
//! The timeout is always evaluated against the *current* config, so the owner
//! can stretch or shrink the window of an attempt that is already running.

use soroban_sdk::{contracttype, Address};

use crate::VaultError;

/// 1 native unit in stroops (7 decimals).
pub const DEFAULT_RECOVERY_BOND: i128 = 10_000_000;
/// 30 days in seconds.
pub const DEFAULT_RECOVERY_TIMEOUT: u64 = 2_592_000;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecoveryConfig {
    pub bond_amount: i128,
    pub timeout_duration: u64,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            bond_amount: DEFAULT_RECOVERY_BOND,
            timeout_duration: DEFAULT_RECOVERY_TIMEOUT,
        }
    }
}

/// A beneficiary's pending claim on ownership.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecoveryAttempt {
    pub recoverer: Address,
    pub started_at: u64,
}

/// Timestamp after which the attempt may be finalized. Saturates, so an
/// absurd timeout yields a deadline that is never passed.
pub fn deadline(attempt: &RecoveryAttempt, config: &RecoveryConfig) -> u64 {
    attempt.started_at.saturating_add(config.timeout_duration)
}

/// `now > started_at + timeout`. Strict: the boundary second itself is still
/// inside the window.
pub fn timeout_completed(
    attempt: Option<&RecoveryAttempt>,
    config: &RecoveryConfig,
    now: u64,
) -> bool {
    match attempt {
        Some(attempt) => now > deadline(attempt, config),
        None => false,
    }
}

pub fn check_owner(owner: &Address, caller: &Address) -> Result<(), VaultError> {
    if owner != caller {
        return Err(VaultError::OnlyOwner);
    }
    Ok(())
}

/// Guards for `start_recovery`, in contract order: membership, exact bond,
/// no attempt in flight.
pub fn check_can_start(
    is_beneficiary: bool,
    bond: i128,
    config: &RecoveryConfig,
    current: Option<&RecoveryAttempt>,
) -> Result<(), VaultError> {
    if !is_beneficiary {
        return Err(VaultError::OnlyBeneficiary);
    }
    if bond != config.bond_amount {
        return Err(VaultError::InsufficientBond);
    }
    if current.is_some() {
        return Err(VaultError::AlreadyRecovering);
    }
    Ok(())
}

/// Guards for `finalize_recovery`. Hands back the attempt so the caller can
/// promote its recoverer.
pub fn check_can_finalize(
    current: Option<RecoveryAttempt>,
    config: &RecoveryConfig,
    now: u64,
) -> Result<RecoveryAttempt, VaultError> {
    let attempt = current.ok_or(VaultError::NoActiveRecovery)?;
    if !timeout_completed(Some(&attempt), config, now) {
        return Err(VaultError::TimeoutNotElapsed);
    }
    Ok(attempt)
}
