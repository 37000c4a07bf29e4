//! CDR Data Holder — Banking Resource API sandbox.
//!
//! Library crate: exposes the router, state, and middleware for the binary
//! and for integration tests in `tests/`.

use std::collections::HashMap;

pub mod api;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;

use models::banking::{Account, Transaction};

/// Shared application state: configuration plus the seeded mock data the
/// sandbox serves. Read-only after startup, shared via `Arc`.
pub struct AppState {
    pub config: config::Config,
    pub accounts: Vec<Account>,
    pub transactions: HashMap<String, Vec<Transaction>>,
}

impl AppState {
    /// State seeded with the sandbox's fixed mock customer data.
    pub fn with_seed_data(config: config::Config) -> Self {
        let accounts = models::banking::seed_accounts();
        let transactions = models::banking::seed_transactions(&accounts);
        Self {
            config,
            accounts,
            transactions,
        }
    }
}
