//! Charge intent data repository for database operations.
//!
//! This module provides the `ChargeIntentRepository`, which persists every charge before
//! the ledger is called and moves it through its statuses. Status changes are conditional
//! on the current status so that concurrent workers (a request and the sweep) cannot both
//! act on the same intent.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        charge_intent::{ChargeIntent, ChargeStatus, CHARGE_DETAILS},
        transaction::ChargeParam,
    },
};

/// Repository providing database operations for charge intents.
pub struct ChargeIntentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChargeIntentRepository<'a, C> {
    /// Creates a new ChargeIntentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open database transaction
    ///
    /// # Returns
    /// - `ChargeIntentRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a charge as `pending` before the ledger is called.
    ///
    /// # Arguments
    /// - `param` - Validated charge parameters; the line items are stored as JSON
    ///
    /// # Returns
    /// - `Ok(ChargeIntent)` - The created intent
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: &ChargeParam) -> Result<ChargeIntent, AppError> {
        let now = Utc::now();
        let line_items = serde_json::to_value(&param.line_items)
            .map_err(|e| AppError::InternalError(format!("Failed to encode line items: {}", e)))?;

        let entity = entity::charge_intent::ActiveModel {
            resident_name: ActiveValue::Set(param.resident_name.clone()),
            price: ActiveValue::Set(param.price),
            date: ActiveValue::Set(param.date),
            details: ActiveValue::Set(CHARGE_DETAILS.to_string()),
            line_items: ActiveValue::Set(line_items),
            status: ActiveValue::Set(ChargeStatus::Pending.as_str().to_string()),
            transaction_id: ActiveValue::Set(None),
            error: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ChargeIntent::from_entity(entity)
    }

    /// Moves an intent from `from` to `to`, only if it is still in `from`.
    ///
    /// # Arguments
    /// - `id` - Intent to update
    /// - `from` - Status the intent is expected to be in
    /// - `to` - New status
    /// - `transaction_id` - Recorded transaction, stored when `Some`
    /// - `error` - Failure detail or operator note, stored when `Some`
    ///
    /// # Returns
    /// - `Ok(true)` - The intent was in `from` and is now in `to`
    /// - `Ok(false)` - The intent does not exist or has already moved on
    /// - `Err(DbErr)` - Database error during update
    pub async fn transition(
        &self,
        id: i32,
        from: ChargeStatus,
        to: ChargeStatus,
        transaction_id: Option<i32>,
        error: Option<String>,
    ) -> Result<bool, DbErr> {
        let mut update = entity::prelude::ChargeIntent::update_many()
            .col_expr(
                entity::charge_intent::Column::Status,
                Expr::value(to.as_str()),
            )
            .col_expr(
                entity::charge_intent::Column::UpdatedAt,
                Expr::value(Utc::now()),
            );

        if let Some(transaction_id) = transaction_id {
            update = update.col_expr(
                entity::charge_intent::Column::TransactionId,
                Expr::value(transaction_id),
            );
        }

        if let Some(error) = error {
            update = update.col_expr(entity::charge_intent::Column::Error, Expr::value(error));
        }

        let result = update
            .filter(entity::charge_intent::Column::Id.eq(id))
            .filter(entity::charge_intent::Column::Status.eq(from.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Finds an intent by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ChargeIntent>, AppError> {
        entity::prelude::ChargeIntent::find_by_id(id)
            .one(self.db)
            .await?
            .map(ChargeIntent::from_entity)
            .transpose()
    }

    /// Gets intents, newest first, optionally only those in `status`.
    pub async fn get_by_status(
        &self,
        status: Option<ChargeStatus>,
    ) -> Result<Vec<ChargeIntent>, AppError> {
        let mut query = entity::prelude::ChargeIntent::find();

        if let Some(status) = status {
            query = query.filter(entity::charge_intent::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_desc(entity::charge_intent::Column::CreatedAt)
            .order_by_desc(entity::charge_intent::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(ChargeIntent::from_entity)
            .collect()
    }

    /// Gets intents in `status` that have not changed since `cutoff`, oldest first.
    ///
    /// # Arguments
    /// - `status` - Status to look for
    /// - `cutoff` - Only intents last updated before this instant are returned
    ///
    /// # Returns
    /// - `Ok(Vec<ChargeIntent>)` - Stale intents
    /// - `Err(AppError)` - Database error or undecodable row
    pub async fn find_stale(
        &self,
        status: ChargeStatus,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<ChargeIntent>, AppError> {
        entity::prelude::ChargeIntent::find()
            .filter(entity::charge_intent::Column::Status.eq(status.as_str()))
            .filter(entity::charge_intent::Column::UpdatedAt.lt(cutoff))
            .order_by_asc(entity::charge_intent::Column::UpdatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(ChargeIntent::from_entity)
            .collect()
    }
}
