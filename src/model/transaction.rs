use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TransactionDto {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub price: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ArticleTransactionDto {
    pub id: i32,
    pub article_id: i32,
    pub transaction_id: i32,
    pub amount: i32,
    pub price: f64,
}

/// Transaction together with its article line items.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TransactionDetailsDto {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub price: f64,
    pub line_items: Vec<ArticleTransactionDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LineItemDto {
    pub article_id: i32,
    pub amount: i32,
    pub price: f64,
}

/// Payload for charging a resident and recording the transaction.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateChargeDto {
    pub price: f64,
    /// Defaults to the time the charge is received.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub line_items: Vec<LineItemDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdateTransactionDto {
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Result of a card read: who tapped and what they can spend.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ResidentBalanceDto {
    pub name: String,
    pub balance: f64,
}
