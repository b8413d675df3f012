//! Structured event emitting for the recoverable vault.
//!
//! Each event publishes under `(STREAM, VLT_*)` so external subscribers can
//! filter on the vault prefix. Payloads carry the ledger timestamp at emission.

#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{contracttype, symbol_short, Address, Env};

// ── Event payloads ───────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub token: Address,
    pub timestamp: u64,
}

/// Fired when the owner adds or removes a beneficiary.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BeneficiaryChangedEvent {
    pub beneficiary: Address,
    pub added: bool,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BondChangedEvent {
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimeoutChangedEvent {
    pub duration: u64,
    pub timestamp: u64,
}

/// Fired when a beneficiary posts the bond and opens a recovery attempt.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecoveryStartedEvent {
    pub beneficiary: Address,
    pub bond: i128,
    pub timestamp: u64,
}

/// Fired when the owner cancels the active attempt.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecoveryCancelledEvent {
    pub owner: Address,
    pub timestamp: u64,
}

/// Fired when a matured attempt hands ownership to the recoverer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecoveryFinalizedEvent {
    pub new_owner: Address,
    pub previous_owner: Address,
    pub timestamp: u64,
}

/// Fired after a successful owner-directed transfer and call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecutedEvent {
    pub destination: Address,
    pub value: i128,
    pub timestamp: u64,
}

// ── Publishers ───────────────────────────────────────────────────────────────

pub fn emit_initialized(env: &Env, owner: Address, token: Address) {
    env.events().publish(
        (symbol_short!("STREAM"), symbol_short!("VLT_INIT")),
        InitializedEvent {
            owner,
            token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_beneficiary_changed(env: &Env, beneficiary: Address, added: bool) {
    let tag = if added {
        symbol_short!("VLT_BADD")
    } else {
        symbol_short!("VLT_BREM")
    };
    env.events().publish(
        (symbol_short!("STREAM"), tag),
        BeneficiaryChangedEvent {
            beneficiary,
            added,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_bond_changed(env: &Env, amount: i128) {
    env.events().publish(
        (symbol_short!("STREAM"), symbol_short!("VLT_BOND")),
        BondChangedEvent {
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_timeout_changed(env: &Env, duration: u64) {
    env.events().publish(
        (symbol_short!("STREAM"), symbol_short!("VLT_TOUT")),
        TimeoutChangedEvent {
            duration,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_recovery_started(env: &Env, beneficiary: Address, bond: i128) {
    env.events().publish(
        (symbol_short!("STREAM"), symbol_short!("VLT_RSTR")),
        RecoveryStartedEvent {
            beneficiary,
            bond,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_recovery_cancelled(env: &Env, owner: Address) {
    env.events().publish(
        (symbol_short!("STREAM"), symbol_short!("VLT_RCNL")),
        RecoveryCancelledEvent {
            owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_recovery_finalized(env: &Env, new_owner: Address, previous_owner: Address) {
    env.events().publish(
        (symbol_short!("STREAM"), symbol_short!("VLT_RFIN")),
        RecoveryFinalizedEvent {
            new_owner,
            previous_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_executed(env: &Env, destination: Address, value: i128) {
    env.events().publish(
        (symbol_short!("STREAM"), symbol_short!("VLT_EXEC")),
        ExecutedEvent {
            destination,
            value,
            timestamp: env.ledger().timestamp(),
        },
    );
}
