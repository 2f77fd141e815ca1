//! Beneficiary accounting records and allocation tiers.
//!
//! One record per beneficiary address, created lazily on first allocation and
//! never deleted. Amounts only ever grow: new tranches increase
//! `cliff_unlocked`/`locked`, withdrawals increase `withdrawn`. The record
//! invariant `withdrawn <= cliff_unlocked + locked` holds at all times.

use crate::errors::VestingError;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

/// Basis-point denominator for tier fractions.
pub const BPS_DENOMINATOR: i128 = 10_000;

const BENEFICIARY_KEY: Symbol = symbol_short!("benef");

/// Allocation tier of a tranche, fixing its immediate-unlock percentage.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AllocationTier {
    Seed,
    Private,
}

impl AllocationTier {
    /// Immediate-unlock fraction of a tranche, in basis points.
    pub fn unlock_bps(&self) -> i128 {
        match self {
            AllocationTier::Seed => 1_000,
            AllocationTier::Private => 1_500,
        }
    }
}

/// Per-beneficiary accounting record stored on-chain.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BeneficiaryRecord {
    /// Cumulative amount releasable as soon as the cliff passes.
    pub cliff_unlocked: i128,
    /// Cumulative amount already paid out. Monotonically non-decreasing.
    pub withdrawn: i128,
    /// Cumulative amount still subject to interval vesting.
    pub locked: i128,
    /// Tier of the most recent tranche. Bookkeeping only: it does not
    /// retroactively change the unlock already applied to prior tranches.
    pub tier: AllocationTier,
}

impl BeneficiaryRecord {
    /// Fresh record for a first-time beneficiary.
    pub fn new(tier: AllocationTier) -> Self {
        Self {
            cliff_unlocked: 0,
            withdrawn: 0,
            locked: 0,
            tier,
        }
    }

    /// Total allocation ceiling for this record.
    pub fn total_allocation(&self) -> Result<i128, VestingError> {
        self.cliff_unlocked
            .checked_add(self.locked)
            .ok_or(VestingError::MathOverflow)
    }

    /// Apply one tranche to this record.
    ///
    /// Splits `amount` into the tier's immediate unlock (floored) and the
    /// locked remainder, and records the tranche's tier as the tier of
    /// reference going forward.
    pub fn add_tranche(
        &mut self,
        amount: i128,
        tier: AllocationTier,
    ) -> Result<(), VestingError> {
        let immediate = immediate_unlock(amount, tier)?;
        let locked = amount
            .checked_sub(immediate)
            .ok_or(VestingError::MathOverflow)?;

        self.cliff_unlocked = self
            .cliff_unlocked
            .checked_add(immediate)
            .ok_or(VestingError::MathOverflow)?;
        self.locked = self
            .locked
            .checked_add(locked)
            .ok_or(VestingError::MathOverflow)?;
        self.tier = tier;
        Ok(())
    }
}

/// Immediate-unlock portion of a tranche: `floor(amount * bps / 10_000)`.
/// Always truncates; the immediate share never exceeds the exact fraction.
pub fn immediate_unlock(amount: i128, tier: AllocationTier) -> Result<i128, VestingError> {
    let scaled = amount
        .checked_mul(tier.unlock_bps())
        .ok_or(VestingError::MathOverflow)?;
    Ok(scaled / BPS_DENOMINATOR)
}

/// Persistent storage for beneficiary records, keyed by address.
pub struct BeneficiaryStorage;

impl BeneficiaryStorage {
    fn key(who: &Address) -> (Symbol, Address) {
        (BENEFICIARY_KEY, who.clone())
    }

    pub fn get(env: &Env, who: &Address) -> Option<BeneficiaryRecord> {
        env.storage().persistent().get(&Self::key(who))
    }

    pub fn store(env: &Env, who: &Address, record: &BeneficiaryRecord) {
        env.storage().persistent().set(&Self::key(who), record);
    }
}
