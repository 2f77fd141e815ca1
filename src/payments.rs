//! Token-collaborator gate.
//!
//! The ledger never holds balances itself; it moves value through the bound
//! token contract via the standard token interface: allowance-based
//! `transfer_from` to pull tranches from the administrator into custody, and
//! `transfer` to push releases out to beneficiaries. Both directions are
//! balance-guarded so a token-side failure surfaces as a ledger error
//! instead of an opaque host trap.

use crate::errors::VestingError;
use soroban_sdk::{symbol_short, token, Address, Env, Symbol};

const TOKEN_KEY: Symbol = symbol_short!("token");

/// Storage for the bound token contract address.
pub struct TokenStorage;

impl TokenStorage {
    pub fn get(env: &Env) -> Option<Address> {
        env.storage().instance().get(&TOKEN_KEY)
    }

    pub fn set(env: &Env, token: &Address) {
        env.storage().instance().set(&TOKEN_KEY, token);
    }

    pub fn require(env: &Env) -> Result<Address, VestingError> {
        Self::get(env).ok_or(VestingError::NotInitialized)
    }
}

/// Verify that `token` references a deployed token contract.
///
/// Probes the token metadata interface; a plain account address (or a
/// contract that does not implement the token interface) fails the probe.
pub fn require_token_contract(env: &Env, token: &Address) -> Result<(), VestingError> {
    let client = token::Client::new(env, token);
    if client.try_decimals().is_err() {
        return Err(VestingError::InvalidTokenContract);
    }
    Ok(())
}

/// Pull `amount` from `from` into ledger custody via the allowance the payer
/// granted to this contract.
pub fn pull_into_custody(
    env: &Env,
    token: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), VestingError> {
    let contract = env.current_contract_address();
    let client = token::Client::new(env, token);

    if client.allowance(from, &contract) < amount {
        return Err(VestingError::InsufficientAllowance);
    }
    if client.balance(from) < amount {
        return Err(VestingError::InsufficientReserve);
    }

    client.transfer_from(&contract, from, &contract, &amount);
    Ok(())
}

/// Push `amount` from ledger custody to `to`.
pub fn pay_from_custody(
    env: &Env,
    token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), VestingError> {
    let contract = env.current_contract_address();
    let client = token::Client::new(env, token);

    if client.balance(&contract) < amount {
        return Err(VestingError::InsufficientReserve);
    }

    client.transfer(&contract, to, &amount);
    Ok(())
}
