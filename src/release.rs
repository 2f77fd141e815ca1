//! Release engine: time-gated withdrawal of vested allocations.
//!
//! # Ordering contract
//!
//! `withdraw` commits the updated `withdrawn` total to storage *before*
//! invoking the token transfer. The token is untrusted code running in the
//! same execution context; a re-entrant call made from inside the transfer
//! observes a record that already reflects the pending payout, computes a
//! releasable amount of zero, and fails with `NothingToWithdraw`. The
//! ordering is the whole of the reentrancy defense; there is no lock.

use crate::allocation::{BeneficiaryRecord, BeneficiaryStorage};
use crate::errors::VestingError;
use crate::events::emit_withdrawal;
use crate::payments::{self, TokenStorage};
use crate::schedule::{self, ScheduleStorage};
use soroban_sdk::{Address, Env};

/// Withdraw everything currently releasable for `caller`.
///
/// Preconditions are checked in order, each with its own failure: the
/// schedule must be configured (`ScheduleNotSet`), the cliff must have
/// passed (`CliffNotReached`), and the releasable amount must be strictly
/// positive (`NothingToWithdraw`). A caller that was never allocated
/// anything holds an implicit empty record and fails the third check.
///
/// Returns the amount paid out.
pub fn withdraw(env: &Env, caller: &Address) -> Result<i128, VestingError> {
    caller.require_auth();
    let token = TokenStorage::require(env)?;

    let start_date = ScheduleStorage::get_start(env).ok_or(VestingError::ScheduleNotSet)?;

    let now = env.ledger().timestamp();
    if now < schedule::cliff_end(start_date)? {
        return Err(VestingError::CliffNotReached);
    }

    let mut record = match BeneficiaryStorage::get(env, caller) {
        Some(record) => record,
        None => return Err(VestingError::NothingToWithdraw),
    };

    let releasable = releasable_amount(&record, now, start_date)?;
    if releasable <= 0 {
        return Err(VestingError::NothingToWithdraw);
    }

    // State first, transfer second. See the module docs.
    record.withdrawn = record
        .withdrawn
        .checked_add(releasable)
        .ok_or(VestingError::MathOverflow)?;
    BeneficiaryStorage::store(env, caller, &record);

    payments::pay_from_custody(env, &token, caller, releasable)?;

    emit_withdrawal(env, caller, releasable);
    Ok(releasable)
}

/// Amount `caller` could withdraw right now; 0 when the schedule is not
/// configured, the cliff has not passed, or nothing is vested beyond what
/// was already withdrawn. Read-only quote for any caller.
pub fn releasable_quote(env: &Env, who: &Address) -> Result<i128, VestingError> {
    let start_date = match ScheduleStorage::get_start(env) {
        Some(start) => start,
        None => return Ok(0),
    };
    let now = env.ledger().timestamp();
    if now < schedule::cliff_end(start_date)? {
        return Ok(0);
    }
    let record = match BeneficiaryStorage::get(env, who) {
        Some(record) => record,
        None => return Ok(0),
    };
    let releasable = releasable_amount(&record, now, start_date)?;
    Ok(releasable.max(0))
}

/// Vested-to-date minus already-withdrawn for one record.
fn releasable_amount(
    record: &BeneficiaryRecord,
    now: u64,
    start_date: u64,
) -> Result<i128, VestingError> {
    let vested = schedule::vested_amount(record.cliff_unlocked, record.locked, now, start_date)?;
    vested
        .checked_sub(record.withdrawn)
        .ok_or(VestingError::MathOverflow)
}
