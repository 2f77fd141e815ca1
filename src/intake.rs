//! Allocation intake engine.
//!
//! Validates and records new allocation tranches, then pulls the aggregate
//! tranche total from the administrator into ledger custody in a single
//! allowance-based transfer. Repeat identities accumulate: intake never
//! overwrites `withdrawn` or erases prior accumulation.

use crate::admin::AdminStorage;
use crate::allocation::{AllocationTier, BeneficiaryRecord, BeneficiaryStorage};
use crate::errors::VestingError;
use crate::events::emit_allocations_added;
use crate::payments::{self, TokenStorage};
use soroban_sdk::{Address, Env, Vec};

/// Register a batch of allocation tranches.
///
/// # Arguments
/// * `caller` - Must be the administrator; funds the batch
/// * `investors` - Beneficiary addresses, one per tranche
/// * `amounts` - Tranche amounts in token base units
/// * `tiers` - Allocation tier per tranche
///
/// # Security
/// - Requires admin authorization
/// - Every tranche is validated before any token movement
/// - The pull is one aggregate `transfer_from` of the batch total, so the
///   administrator is debited exactly the sum of the tranche amounts
pub fn add_investors(
    env: &Env,
    caller: &Address,
    investors: &Vec<Address>,
    amounts: &Vec<i128>,
    tiers: &Vec<AllocationTier>,
) -> Result<(), VestingError> {
    caller.require_auth();
    AdminStorage::require_admin(env, caller)?;
    let token = TokenStorage::require(env)?;

    if investors.is_empty() {
        return Err(VestingError::EmptyBatch);
    }
    if investors.len() != amounts.len() || investors.len() != tiers.len() {
        return Err(VestingError::LengthMismatch);
    }

    let ledger_address = env.current_contract_address();
    let mut total: i128 = 0;

    for i in 0..investors.len() {
        let who = investors.get_unchecked(i);
        let amount = amounts.get_unchecked(i);
        let tier = tiers.get_unchecked(i);

        // The ledger's own address is the one identity that can never claim.
        if who == ledger_address {
            return Err(VestingError::InvalidBeneficiary);
        }
        if amount <= 0 {
            return Err(VestingError::InvalidAmount);
        }

        let mut record = BeneficiaryStorage::get(env, &who)
            .unwrap_or_else(|| BeneficiaryRecord::new(tier));
        record.add_tranche(amount, tier)?;
        BeneficiaryStorage::store(env, &who, &record);

        total = total
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
    }

    payments::pull_into_custody(env, &token, caller, total)?;

    emit_allocations_added(env, investors, amounts, tiers);
    Ok(())
}
