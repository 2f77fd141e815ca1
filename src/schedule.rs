//! Global release schedule: one-time start date and the vesting curve.
//!
//! The schedule is a single contract-wide commitment. Once the start date is
//! set it can never be changed; every beneficiary vests against the same
//! cliff and the same interval curve regardless of tier.
//!
//! # Curve
//!
//! Nothing is claimable before `vesting_start + CLIFF_DURATION`. At the cliff
//! the per-record `cliff_unlocked` amount becomes releasable in full; the
//! `locked` amount then unlocks in discrete per-minute steps over
//! `TOTAL_RELEASE_INTERVALS` intervals. All division floors, so the vested
//! amount at any instant is exact in base units and sums to exactly
//! `cliff_unlocked + locked` once the last interval passes.

use crate::errors::VestingError;
use soroban_sdk::{symbol_short, Env, Symbol};

/// Delay after the start date before anything is claimable (seconds).
pub const CLIFF_DURATION: u64 = 600;

/// Length of one release step (seconds).
pub const RELEASE_INTERVAL: u64 = 60;

/// Number of release steps until the locked portion is fully vested.
pub const TOTAL_RELEASE_INTERVALS: u64 = 600;

const VESTING_START_KEY: Symbol = symbol_short!("vest_strt");

/// Accessors for the one-time vesting start date.
pub struct ScheduleStorage;

impl ScheduleStorage {
    /// The configured start date, if any.
    pub fn get_start(env: &Env) -> Option<u64> {
        env.storage().instance().get(&VESTING_START_KEY)
    }

    /// Record the start date. One-shot; the second attempt fails permanently.
    pub fn set_start(env: &Env, start_date: u64) -> Result<(), VestingError> {
        if start_date == 0 {
            return Err(VestingError::InvalidStartDate);
        }
        if Self::get_start(env).is_some() {
            return Err(VestingError::ScheduleAlreadySet);
        }
        env.storage().instance().set(&VESTING_START_KEY, &start_date);
        Ok(())
    }
}

/// Timestamp at which the cliff passes for the given start date.
pub fn cliff_end(start_date: u64) -> Result<u64, VestingError> {
    start_date
        .checked_add(CLIFF_DURATION)
        .ok_or(VestingError::MathOverflow)
}

/// Number of completed release intervals at `now`, clamped to the full
/// vesting window. Returns 0 at or before the cliff.
pub fn intervals_elapsed(now: u64, start_date: u64) -> Result<u64, VestingError> {
    let cliff = cliff_end(start_date)?;
    if now <= cliff {
        return Ok(0);
    }
    let elapsed = now - cliff;
    Ok((elapsed / RELEASE_INTERVAL).min(TOTAL_RELEASE_INTERVALS))
}

/// Portion of `locked` vested after `intervals` completed release steps:
/// `floor(locked * intervals / TOTAL_RELEASE_INTERVALS)`.
pub fn vested_from_locked(locked: i128, intervals: u64) -> Result<i128, VestingError> {
    let capped = intervals.min(TOTAL_RELEASE_INTERVALS);
    let scaled = locked
        .checked_mul(capped as i128)
        .ok_or(VestingError::MathOverflow)?;
    Ok(scaled / TOTAL_RELEASE_INTERVALS as i128)
}

/// Total vested amount for a record at `now`: the cliff unlock plus the
/// stepped share of the locked portion. Callers gate on the cliff before
/// treating this as claimable; nothing is payable before it passes.
pub fn vested_amount(
    cliff_unlocked: i128,
    locked: i128,
    now: u64,
    start_date: u64,
) -> Result<i128, VestingError> {
    let intervals = intervals_elapsed(now, start_date)?;
    let from_locked = vested_from_locked(locked, intervals)?;
    cliff_unlocked
        .checked_add(from_locked)
        .ok_or(VestingError::MathOverflow)
}
