#![no_std]

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

mod admin;
mod allocation;
mod errors;
mod events;
mod intake;
mod payments;
mod release;
mod schedule;


use admin::AdminStorage;
use allocation::{AllocationTier, BeneficiaryRecord, BeneficiaryStorage};
use errors::VestingError;
use payments::TokenStorage;
use schedule::ScheduleStorage;

#[contract]
pub struct TokenVestingContract;

#[contractimpl]
impl TokenVestingContract {
    // ============================================================================
    // Initialization
    // ============================================================================

    /// Bind the ledger to its administrator and token contract (one-time setup)
    ///
    /// `token` must reference a deployed token contract, not an arbitrary
    /// address; the reference is probed before anything is stored.
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), VestingError> {
        admin.require_auth();
        payments::require_token_contract(&env, &token)?;
        AdminStorage::initialize(&env, &admin)?;
        TokenStorage::set(&env, &token);
        events::emit_initialized(&env, &admin, &token);
        Ok(())
    }

    // ============================================================================
    // Schedule Configuration
    // ============================================================================

    /// Set the global vesting start date (admin only, exactly once)
    pub fn set_start_date(env: Env, caller: Address, start_date: u64) -> Result<(), VestingError> {
        caller.require_auth();
        AdminStorage::require_admin(&env, &caller)?;
        ScheduleStorage::set_start(&env, start_date)?;
        events::emit_schedule_set(&env, start_date);
        Ok(())
    }

    // ============================================================================
    // Intake
    // ============================================================================

    /// Register allocation tranches and pull their total into custody
    pub fn add_investors(
        env: Env,
        caller: Address,
        investors: Vec<Address>,
        amounts: Vec<i128>,
        tiers: Vec<AllocationTier>,
    ) -> Result<(), VestingError> {
        intake::add_investors(&env, &caller, &investors, &amounts, &tiers)
    }

    // ============================================================================
    // Release
    // ============================================================================

    /// Withdraw everything currently releasable for the caller
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, VestingError> {
        release::withdraw(&env, &caller)
    }

    // ============================================================================
    // Queries
    // ============================================================================

    /// Full accounting record for a beneficiary, if one exists
    pub fn get_beneficiary(env: Env, who: Address) -> Option<BeneficiaryRecord> {
        BeneficiaryStorage::get(&env, &who)
    }

    /// Amount `who` could withdraw right now (0 before configuration or cliff)
    pub fn get_releasable(env: Env, who: Address) -> Result<i128, VestingError> {
        release::releasable_quote(&env, &who)
    }

    /// The configured vesting start date, if set
    pub fn get_vesting_start(env: Env) -> Option<u64> {
        ScheduleStorage::get_start(&env)
    }

    /// The administrator address, if initialized
    pub fn get_admin(env: Env) -> Option<Address> {
        AdminStorage::get_admin(&env)
    }

    /// The bound token contract address, if initialized
    pub fn get_token(env: Env) -> Option<Address> {
        TokenStorage::get(&env)
    }
}
