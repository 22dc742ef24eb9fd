//! Administrative access to recorded transactions.
//!
//! Transactions are created only by the charge flow. This service lists them and lets an
//! administrator correct or remove a record; none of these operations touch the ledger.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::transaction::TransactionRepository,
    error::AppError,
    model::transaction::{Transaction, TransactionWithItems, UpdateTransactionParam},
};

pub struct TransactionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a transaction with its line items.
    ///
    /// # Returns
    /// - `Ok(TransactionWithItems)` - The transaction
    /// - `Err(AppError::NotFound)` - No transaction with that id
    pub async fn get_by_id(&self, id: i32) -> Result<TransactionWithItems, AppError> {
        TransactionRepository::new(self.db)
            .find_with_line_items(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_all(&self) -> Result<Vec<Transaction>, AppError> {
        Ok(TransactionRepository::new(self.db).get_all().await?)
    }

    /// Corrects the date and/or price of a transaction.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - The corrected transaction
    /// - `Err(AppError::BadRequest)` - The new price is not a positive number
    /// - `Err(AppError::NotFound)` - No transaction with that id
    pub async fn update(
        &self,
        id: i32,
        param: UpdateTransactionParam,
    ) -> Result<Transaction, AppError> {
        if let Some(price) = param.price {
            if !price.is_finite() || price <= 0.0 {
                return Err(AppError::BadRequest(format!(
                    "Price must be a positive number, got {}",
                    price
                )));
            }
        }

        TransactionRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a transaction and its line items atomically.
    ///
    /// # Returns
    /// - `Ok(())` - Transaction deleted
    /// - `Err(AppError::NotFound)` - No transaction with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !TransactionRepository::new(&txn).delete(id).await? {
            txn.rollback().await?;
            return Err(not_found(id));
        }

        txn.commit().await?;

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Transaction {} not found", id))
}
