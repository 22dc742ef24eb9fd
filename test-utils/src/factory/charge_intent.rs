//! Charge intent factory.
//!
//! Lets tests seed intents in any status and with any age, which is what the
//! reconciliation sweep tests need.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test charge intents.
pub struct ChargeIntentFactory<'a> {
    db: &'a DatabaseConnection,
    resident_name: String,
    price: f64,
    status: String,
    line_items: serde_json::Value,
    updated_at: DateTime<Utc>,
}

impl<'a> ChargeIntentFactory<'a> {
    /// Creates a new ChargeIntentFactory with default values.
    ///
    /// Defaults:
    /// - resident_name: `"alice"`
    /// - price: `3.0`
    /// - status: `"pending"`
    /// - line_items: `[]`
    /// - updated_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            resident_name: "alice".to_string(),
            price: 3.0,
            status: "pending".to_string(),
            line_items: serde_json::json!([]),
            updated_at: Utc::now(),
        }
    }

    /// Sets the resident name.
    pub fn resident_name(mut self, name: impl Into<String>) -> Self {
        self.resident_name = name.into();
        self
    }

    /// Sets the charged price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the stored status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the serialized line items.
    pub fn line_items(mut self, line_items: serde_json::Value) -> Self {
        self.line_items = line_items;
        self
    }

    /// Sets the last-updated timestamp, used to age intents past the grace period.
    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Builds and inserts the charge intent into the database.
    pub async fn build(self) -> Result<entity::charge_intent::Model, DbErr> {
        entity::charge_intent::ActiveModel {
            resident_name: ActiveValue::Set(self.resident_name),
            price: ActiveValue::Set(self.price),
            date: ActiveValue::Set(Utc::now()),
            details: ActiveValue::Set("rupay_transaction".to_string()),
            line_items: ActiveValue::Set(self.line_items),
            status: ActiveValue::Set(self.status),
            transaction_id: ActiveValue::Set(None),
            error: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.updated_at),
            updated_at: ActiveValue::Set(self.updated_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending charge intent with default values.
pub async fn create_charge_intent(
    db: &DatabaseConnection,
) -> Result<entity::charge_intent::Model, DbErr> {
    ChargeIntentFactory::new(db).build().await
}
