//! Remote credit ledger holding resident balances.
//!
//! Residents pay from their SavaPage print-credit account. The ledger is the source of
//! truth for balances; the local database only records sales the ledger confirmed.

pub mod savapage;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::server::error::ledger::LedgerError;

#[async_trait]
pub trait CreditLedger: Send + Sync {
    /// Current balance of the account named `name`.
    async fn balance(&self, name: &str) -> Result<f64, LedgerError>;

    /// Adds `amount` (negative to debit) to the account named `name`.
    ///
    /// # Returns
    /// - `Ok(())` - The ledger confirmed the adjustment
    /// - `Err(LedgerError)` - The adjustment was refused or its outcome is unknown
    async fn adjust(&self, name: &str, amount: f64, details: &str) -> Result<(), LedgerError>;
}
