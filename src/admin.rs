//! Admin role management for the vesting ledger.
//!
//! This module provides a centralized admin system for the privileged
//! operations: schedule configuration and allocation intake.
//!
//! # Security Model
//!
//! - Single admin address, bound once at contract initialization
//! - All privileged operations reduce to one predicate: "is this caller
//!   the administrator"
//! - Admin transfer mechanics are intentionally absent
//!
//! # Storage Design
//!
//! Uses instance storage for:
//! - Admin address (single source of truth)
//! - Initialization flag (prevents re-initialization)

use crate::errors::VestingError;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

/// Storage keys for admin management
pub const ADMIN_KEY: Symbol = symbol_short!("admin");
pub const ADMIN_INITIALIZED_KEY: Symbol = symbol_short!("adm_init");

/// Admin storage and management operations
pub struct AdminStorage;

impl AdminStorage {
    /// Initialize the admin address (can only be called once)
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `admin` - The address to set as admin
    ///
    /// # Returns
    /// * `Ok(())` if initialization succeeds
    /// * `Err(VestingError::AlreadyInitialized)` if admin was already set
    pub fn initialize(env: &Env, admin: &Address) -> Result<(), VestingError> {
        // Check if already initialized
        let is_initialized: bool = env
            .storage()
            .instance()
            .get(&ADMIN_INITIALIZED_KEY)
            .unwrap_or(false);

        if is_initialized {
            return Err(VestingError::AlreadyInitialized);
        }

        // Set admin and mark as initialized
        env.storage().instance().set(&ADMIN_KEY, admin);
        env.storage().instance().set(&ADMIN_INITIALIZED_KEY, &true);

        Ok(())
    }

    /// Get the current admin address
    ///
    /// # Returns
    /// * `Some(Address)` if admin is set
    /// * `None` if admin has not been initialized
    pub fn get_admin(env: &Env) -> Option<Address> {
        env.storage().instance().get(&ADMIN_KEY)
    }

    /// Check if an address is the admin
    pub fn is_admin(env: &Env, address: &Address) -> bool {
        if let Some(admin) = Self::get_admin(env) {
            admin == *address
        } else {
            false
        }
    }

    /// Require that an address is the admin (authorization helper)
    ///
    /// # Returns
    /// * `Ok(())` if the address is the admin
    /// * `Err(VestingError::NotAdmin)` if not admin or admin not set
    ///
    /// # Usage
    /// Use this helper in functions that require admin privileges:
    /// ```ignore
    /// AdminStorage::require_admin(&env, &caller)?;
    /// ```
    pub fn require_admin(env: &Env, address: &Address) -> Result<(), VestingError> {
        if !Self::is_admin(env, address) {
            return Err(VestingError::NotAdmin);
        }
        Ok(())
    }
}
