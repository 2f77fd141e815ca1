//! Event emission helpers for the vesting ledger.
//!
//! Events are the contract's observability surface: every state-changing
//! operation publishes one event carrying the exact values that were applied,
//! so off-chain tooling and tests can reconcile the ledger without reading
//! storage.

use crate::allocation::AllocationTier;
use soroban_sdk::{symbol_short, Address, Env, Vec};

/// Emitted once when the contract is bound to its admin and token.
pub fn emit_initialized(env: &Env, admin: &Address, token: &Address) {
    env.events().publish(
        (symbol_short!("init"),),
        (admin.clone(), token.clone()),
    );
}

/// Emitted when the one-time vesting start date is configured.
pub fn emit_schedule_set(env: &Env, start_date: u64) {
    env.events()
        .publish((symbol_short!("sched_set"),), start_date);
}

/// Emitted once per successful intake call with the full arrays as added.
pub fn emit_allocations_added(
    env: &Env,
    investors: &Vec<Address>,
    amounts: &Vec<i128>,
    tiers: &Vec<AllocationTier>,
) {
    env.events().publish(
        (symbol_short!("alloc_add"),),
        (investors.clone(), amounts.clone(), tiers.clone()),
    );
}

/// Emitted on every successful withdrawal.
pub fn emit_withdrawal(env: &Env, beneficiary: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("withdraw"),),
        (beneficiary.clone(), amount),
    );
}
