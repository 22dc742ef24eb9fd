//! Charge intent domain models.
//!
//! A charge intent records a charge before the ledger is called and follows it through
//! the debit and the local commit. It is what lets a debit whose local record failed be
//! recovered later instead of being lost.
//!
//! ```text
//! pending ──debit ok──▶ debited ──commit──▶ committed
//!    │                     │
//!    │ debit failed        └──operator──▶ resolved
//!    ▼
//!  failed
//!
//! pending (stale) ──sweep──▶ needs_review ──operator──▶ resolved
//! ```

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::{
    model::charge_intent::ChargeIntentDto,
    server::{
        error::{internal::InternalError, AppError},
        model::transaction::{ChargeParam, LineItemParam},
    },
};

/// Details label sent with every SavaPage debit.
pub const CHARGE_DETAILS: &str = "rupay_transaction";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeStatus {
    /// Recorded, ledger not yet confirmed.
    Pending,
    /// Ledger confirmed the debit, no local transaction yet.
    Debited,
    /// Local transaction recorded.
    Committed,
    /// Ledger refused the debit.
    Failed,
    /// Ledger outcome unknown; needs an operator.
    NeedsReview,
    /// Closed by an operator.
    Resolved,
}

impl ChargeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Debited => "debited",
            Self::Committed => "committed",
            Self::Failed => "failed",
            Self::NeedsReview => "needs_review",
            Self::Resolved => "resolved",
        }
    }

    /// Whether an operator may close an intent in this status.
    pub fn is_resolvable(&self) -> bool {
        matches!(self, Self::Debited | Self::NeedsReview)
    }
}

impl fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChargeStatus {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "debited" => Ok(Self::Debited),
            "committed" => Ok(Self::Committed),
            "failed" => Ok(Self::Failed),
            "needs_review" => Ok(Self::NeedsReview),
            "resolved" => Ok(Self::Resolved),
            other => Err(InternalError::UnknownChargeStatus {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChargeIntent {
    pub id: i32,
    pub resident_name: String,
    pub price: f64,
    /// Date the transaction will be recorded with.
    pub date: DateTime<Utc>,
    pub details: String,
    pub line_items: Vec<LineItemParam>,
    pub status: ChargeStatus,
    /// Set once committed.
    pub transaction_id: Option<i32>,
    /// Last failure or operator note.
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChargeIntent {
    pub fn into_dto(self) -> ChargeIntentDto {
        ChargeIntentDto {
            id: self.id,
            resident_name: self.resident_name,
            price: self.price,
            date: self.date,
            details: self.details,
            line_items: self
                .line_items
                .into_iter()
                .map(LineItemParam::into_dto)
                .collect(),
            status: self.status.to_string(),
            transaction_id: self.transaction_id,
            error: self.error,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a charge intent at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ChargeIntent)` - The converted domain model
    /// - `Err(AppError::InternalErr)` - Stored status or line items could not be decoded
    pub fn from_entity(entity: entity::charge_intent::Model) -> Result<Self, AppError> {
        let status = entity.status.parse::<ChargeStatus>()?;
        let line_items: Vec<LineItemParam> = serde_json::from_value(entity.line_items)
            .map_err(|source| InternalError::InvalidLineItems {
                intent_id: entity.id,
                source,
            })?;

        Ok(Self {
            id: entity.id,
            resident_name: entity.resident_name,
            price: entity.price,
            date: entity.date,
            details: entity.details,
            line_items,
            status,
            transaction_id: entity.transaction_id,
            error: entity.error,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Rebuilds the charge this intent was recorded for.
    pub fn to_charge(&self) -> ChargeParam {
        ChargeParam {
            resident_name: self.resident_name.clone(),
            price: self.price,
            date: self.date,
            line_items: self.line_items.clone(),
        }
    }
}
