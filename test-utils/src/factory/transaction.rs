//! Transaction factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test transactions.
pub struct TransactionFactory<'a> {
    db: &'a DatabaseConnection,
    date: DateTime<Utc>,
    price: f64,
}

impl<'a> TransactionFactory<'a> {
    /// Creates a new TransactionFactory with default values.
    ///
    /// Defaults:
    /// - date: now
    /// - price: `5.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            date: Utc::now(),
            price: 5.0,
        }
    }

    /// Sets the transaction date.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Sets the total price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the transaction into the database.
    pub async fn build(self) -> Result<entity::transaction::Model, DbErr> {
        entity::transaction::ActiveModel {
            date: ActiveValue::Set(self.date),
            price: ActiveValue::Set(self.price),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Builds the transaction and attaches one line item for the given article.
    ///
    /// # Arguments
    /// - `article_id` - Existing article to reference
    /// - `amount` - Quantity purchased
    ///
    /// # Returns
    /// - `Ok((transaction, line_item))` - Both created entities
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build_with_line_item(
        self,
        article_id: i32,
        amount: i32,
    ) -> Result<
        (
            entity::transaction::Model,
            entity::article_transaction::Model,
        ),
        DbErr,
    > {
        let db = self.db;
        let unit_price = self.price / amount.max(1) as f64;
        let transaction = self.build().await?;

        let line_item = entity::article_transaction::ActiveModel {
            article_id: ActiveValue::Set(article_id),
            transaction_id: ActiveValue::Set(transaction.id),
            amount: ActiveValue::Set(amount),
            price: ActiveValue::Set(unit_price),
            ..Default::default()
        }
        .insert(db)
        .await?;

        Ok((transaction, line_item))
    }
}

/// Creates a transaction with default values.
pub async fn create_transaction(
    db: &DatabaseConnection,
) -> Result<entity::transaction::Model, DbErr> {
    TransactionFactory::new(db).build().await
}
