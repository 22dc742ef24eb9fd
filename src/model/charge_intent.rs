use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::transaction::LineItemDto;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChargeIntentDto {
    pub id: i32,
    pub resident_name: String,
    pub price: f64,
    pub date: DateTime<Utc>,
    pub details: String,
    pub line_items: Vec<LineItemDto>,
    pub status: String,
    pub transaction_id: Option<i32>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ResolveChargeIntentDto {
    /// Operator note stored on the intent.
    #[serde(default)]
    pub note: Option<String>,
}
