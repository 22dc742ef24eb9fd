//! Transaction data repository for database operations.
//!
//! This module provides the `TransactionRepository` for recorded sales and their article
//! line items. The repository is generic over the connection so the charge flow can insert
//! a transaction, its line items and the intent status change in one database transaction.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::transaction::{
    ArticleTransaction, LineItemParam, Transaction, TransactionWithItems,
    UpdateTransactionParam,
};

/// Repository providing database operations for transactions and line items.
pub struct TransactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TransactionRepository<'a, C> {
    /// Creates a new TransactionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open database transaction
    ///
    /// # Returns
    /// - `TransactionRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a sale.
    ///
    /// # Arguments
    /// - `date` - When the sale happened
    /// - `price` - Total amount debited
    ///
    /// # Returns
    /// - `Ok(Transaction)` - The created transaction
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, date: DateTime<Utc>, price: f64) -> Result<Transaction, DbErr> {
        let entity = entity::transaction::ActiveModel {
            date: ActiveValue::Set(date),
            price: ActiveValue::Set(price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Transaction::from_entity(entity))
    }

    /// Attaches article line items to a transaction.
    ///
    /// # Arguments
    /// - `transaction_id` - Id of the owning transaction
    /// - `line_items` - Articles, quantities and unit prices
    ///
    /// # Returns
    /// - `Ok(Vec<ArticleTransaction>)` - Created line items in input order
    /// - `Err(DbErr)` - Database error, including unknown article or transaction ids
    pub async fn create_line_items(
        &self,
        transaction_id: i32,
        line_items: &[LineItemParam],
    ) -> Result<Vec<ArticleTransaction>, DbErr> {
        let mut created = Vec::with_capacity(line_items.len());

        for item in line_items {
            let entity = entity::article_transaction::ActiveModel {
                article_id: ActiveValue::Set(item.article_id),
                transaction_id: ActiveValue::Set(transaction_id),
                amount: ActiveValue::Set(item.amount),
                price: ActiveValue::Set(item.price),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            created.push(ArticleTransaction::from_entity(entity));
        }

        Ok(created)
    }

    /// Finds a transaction by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Transaction>, DbErr> {
        let entity = entity::prelude::Transaction::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Transaction::from_entity))
    }

    /// Finds a transaction together with its line items.
    ///
    /// # Returns
    /// - `Ok(Some(TransactionWithItems))` - Transaction and its line items ordered by id
    /// - `Ok(None)` - No transaction with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_line_items(
        &self,
        id: i32,
    ) -> Result<Option<TransactionWithItems>, DbErr> {
        let Some(transaction) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let line_items = entity::prelude::ArticleTransaction::find()
            .filter(entity::article_transaction::Column::TransactionId.eq(id))
            .order_by_asc(entity::article_transaction::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(ArticleTransaction::from_entity)
            .collect();

        Ok(Some(TransactionWithItems {
            transaction,
            line_items,
        }))
    }

    /// Gets all transactions, newest first.
    pub async fn get_all(&self) -> Result<Vec<Transaction>, DbErr> {
        let entities = entity::prelude::Transaction::find()
            .order_by_desc(entity::transaction::Column::Date)
            .order_by_desc(entity::transaction::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Transaction::from_entity).collect())
    }

    /// Corrects the date and/or price of a transaction.
    ///
    /// Fields left as `None` keep their stored value.
    ///
    /// # Returns
    /// - `Ok(Some(Transaction))` - The updated transaction
    /// - `Ok(None)` - No transaction with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateTransactionParam,
    ) -> Result<Option<Transaction>, DbErr> {
        let Some(entity) = entity::prelude::Transaction::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::transaction::ActiveModel = entity.into();
        if let Some(date) = param.date {
            active.date = ActiveValue::Set(date);
        }
        if let Some(price) = param.price {
            active.price = ActiveValue::Set(price);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Transaction::from_entity(entity)))
    }

    /// Deletes a transaction and its line items.
    ///
    /// Line items are deleted first. Run inside a database transaction to make the pair
    /// atomic.
    ///
    /// # Returns
    /// - `Ok(true)` - Transaction deleted
    /// - `Ok(false)` - No transaction with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::ArticleTransaction::delete_many()
            .filter(entity::article_transaction::Column::TransactionId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Transaction::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
