use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::recovery::{RecoveryAttempt, RecoveryConfig};

const INIT: Symbol = symbol_short!("INIT");
const OWNER: Symbol = symbol_short!("OWNER");
const TOKEN: Symbol = symbol_short!("TOKEN");
const CONFIG: Symbol = symbol_short!("CONFIG");
const RECOVERY: Symbol = symbol_short!("RECOVERY");
const BENEF: Symbol = symbol_short!("BENEF");

const TTL_THRESHOLD: u32 = 5_184_000; // 5,184,000 ledgers ~= 300 days (@ ~5s/ledger)
const TTL_EXTEND_TO: u32 = 10_368_000; // 10,368,000 ledgers ~= 600 days (@ ~5s/ledger)

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn extend_beneficiary_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INIT)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&INIT, &true);
}

// ── Owner & token ────────────────────────────────────────────────────────────

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

pub fn get_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&TOKEN)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&TOKEN, token);
}

// ── Recovery config & attempt ────────────────────────────────────────────────

/// Stored config, or the defaults when nothing has been written yet.
///
/// `initialize` writes exactly these defaults, so an uninitialized vault
/// reports the config it would start with rather than `NotInitialized`.
pub fn get_config(env: &Env) -> RecoveryConfig {
    env.storage().instance().get(&CONFIG).unwrap_or_default()
}

pub fn set_config(env: &Env, config: &RecoveryConfig) {
    env.storage().instance().set(&CONFIG, config);
}

pub fn get_recovery(env: &Env) -> Option<RecoveryAttempt> {
    env.storage().instance().get(&RECOVERY)
}

pub fn set_recovery(env: &Env, attempt: &RecoveryAttempt) {
    env.storage().instance().set(&RECOVERY, attempt);
}

/// Absent key is the "no attempt" state; removing an absent key is a no-op.
pub fn clear_recovery(env: &Env) {
    env.storage().instance().remove(&RECOVERY);
}

// ── Beneficiaries ────────────────────────────────────────────────────────────

pub fn add_beneficiary(env: &Env, beneficiary: &Address) {
    let key = (BENEF, beneficiary.clone());
    env.storage().persistent().set(&key, &true);
    extend_beneficiary_ttl(env, &key);
}

pub fn remove_beneficiary(env: &Env, beneficiary: &Address) {
    env.storage()
        .persistent()
        .remove(&(BENEF, beneficiary.clone()));
}

pub fn is_beneficiary(env: &Env, address: &Address) -> bool {
    let key = (BENEF, address.clone());
    let member = env.storage().persistent().get(&key).unwrap_or(false);
    if member {
        extend_beneficiary_ttl(env, &key);
    }
    member
}
