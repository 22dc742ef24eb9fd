//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed by
//! the handlers. The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for the resident directory, transactions and charge intents
//! - Card reader handle, shared so every request queues on the same reader lock
//! - Credit ledger client used for balances and debits

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{ledger::CreditLedger, service::reader::CardReader};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `CardReader` shares its channel and lock through `Arc`s
/// - `Arc<dyn CreditLedger>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Card reader reached over the message channel.
    pub card_reader: CardReader,

    /// SavaPage credit ledger.
    pub ledger: Arc<dyn CreditLedger>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `card_reader` - Card reader handle
    /// - `ledger` - Credit ledger client
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, card_reader: CardReader, ledger: Arc<dyn CreditLedger>) -> Self {
        Self {
            db,
            card_reader,
            ledger,
        }
    }
}
