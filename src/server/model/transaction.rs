//! Transaction domain models and parameters.
//!
//! A transaction is a confirmed bar sale: one debit against a resident's SavaPage account
//! and, optionally, the article line items it was made of. Also holds the card-read result
//! `ResidentBalance` since it is the first half of the same sale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::transaction::{
        ArticleTransactionDto, CreateChargeDto, LineItemDto, ResidentBalanceDto,
        TransactionDetailsDto, TransactionDto, UpdateTransactionDto,
    },
    server::error::AppError,
};

const CENT_TOLERANCE: f64 = 1e-6;

/// Recorded sale.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i32,
    pub date: DateTime<Utc>,
    /// Total amount debited from the ledger.
    pub price: f64,
}

impl Transaction {
    pub fn into_dto(self) -> TransactionDto {
        TransactionDto {
            id: self.id,
            date: self.date,
            price: self.price,
        }
    }

    pub fn from_entity(entity: entity::transaction::Model) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            price: entity.price,
        }
    }
}

/// Article line item of a recorded sale.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleTransaction {
    pub id: i32,
    pub article_id: i32,
    pub transaction_id: i32,
    /// Quantity sold.
    pub amount: i32,
    /// Unit price at the time of sale.
    pub price: f64,
}

impl ArticleTransaction {
    pub fn into_dto(self) -> ArticleTransactionDto {
        ArticleTransactionDto {
            id: self.id,
            article_id: self.article_id,
            transaction_id: self.transaction_id,
            amount: self.amount,
            price: self.price,
        }
    }

    pub fn from_entity(entity: entity::article_transaction::Model) -> Self {
        Self {
            id: entity.id,
            article_id: entity.article_id,
            transaction_id: entity.transaction_id,
            amount: entity.amount,
            price: entity.price,
        }
    }
}

/// Transaction together with its line items.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionWithItems {
    pub transaction: Transaction,
    pub line_items: Vec<ArticleTransaction>,
}

impl TransactionWithItems {
    pub fn into_dto(self) -> TransactionDetailsDto {
        TransactionDetailsDto {
            id: self.transaction.id,
            date: self.transaction.date,
            price: self.transaction.price,
            line_items: self
                .line_items
                .into_iter()
                .map(ArticleTransaction::into_dto)
                .collect(),
        }
    }
}

/// Line item requested as part of a charge.
///
/// Serialized into the charge intent so the sale can be recorded later from the intent
/// alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemParam {
    pub article_id: i32,
    pub amount: i32,
    pub price: f64,
}

impl LineItemParam {
    pub fn from_dto(dto: LineItemDto) -> Self {
        Self {
            article_id: dto.article_id,
            amount: dto.amount,
            price: dto.price,
        }
    }

    pub fn into_dto(self) -> LineItemDto {
        LineItemDto {
            article_id: self.article_id,
            amount: self.amount,
            price: self.price,
        }
    }
}

/// Parameters for charging a resident.
#[derive(Debug, Clone)]
pub struct ChargeParam {
    /// SavaPage account to debit.
    pub resident_name: String,
    /// Total amount to debit, positive.
    pub price: f64,
    pub date: DateTime<Utc>,
    pub line_items: Vec<LineItemParam>,
}

impl ChargeParam {
    /// Builds charge parameters from the request, defaulting the date to now.
    pub fn from_dto(resident_name: String, dto: CreateChargeDto) -> Self {
        Self {
            resident_name,
            price: dto.price,
            date: dto.date.unwrap_or_else(Utc::now),
            line_items: dto
                .line_items
                .into_iter()
                .map(LineItemParam::from_dto)
                .collect(),
        }
    }

    /// Checks the charge before anything is sent to the ledger.
    ///
    /// # Returns
    /// - `Ok(())` - Name is set, price is a positive whole number of cents, every line item
    ///   has a positive amount and a non-negative finite unit price
    /// - `Err(AppError::BadRequest)` - First violated rule
    pub fn validate(&self) -> Result<(), AppError> {
        if self.resident_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Resident name must not be empty".to_string(),
            ));
        }

        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(AppError::BadRequest(format!(
                "Price must be a positive number, got {}",
                self.price
            )));
        }

        // The ledger is adjusted in cents; the recorded price must equal the debit.
        let cents = self.price * 100.0;
        if (cents - cents.round()).abs() > CENT_TOLERANCE || cents.round() < 1.0 {
            return Err(AppError::BadRequest(format!(
                "Price must be a whole number of cents, got {}",
                self.price
            )));
        }

        for item in &self.line_items {
            if item.amount <= 0 {
                return Err(AppError::BadRequest(format!(
                    "Amount of article {} must be positive, got {}",
                    item.article_id, item.amount
                )));
            }

            if !item.price.is_finite() || item.price < 0.0 {
                return Err(AppError::BadRequest(format!(
                    "Price of article {} must not be negative, got {}",
                    item.article_id, item.price
                )));
            }
        }

        Ok(())
    }
}

/// Administrative correction of a recorded transaction.
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionParam {
    pub date: Option<DateTime<Utc>>,
    pub price: Option<f64>,
}

impl UpdateTransactionParam {
    pub fn from_dto(dto: UpdateTransactionDto) -> Self {
        Self {
            date: dto.date,
            price: dto.price,
        }
    }
}

/// Result of a card read.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidentBalance {
    pub name: String,
    pub balance: f64,
}

impl ResidentBalance {
    pub fn into_dto(self) -> ResidentBalanceDto {
        ResidentBalanceDto {
            name: self.name,
            balance: self.balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charge(price: f64, line_items: Vec<LineItemParam>) -> ChargeParam {
        ChargeParam {
            resident_name: "bob".to_string(),
            price,
            date: Utc::now(),
            line_items,
        }
    }

    #[test]
    fn accepts_positive_price() {
        assert!(charge(3.0, vec![]).validate().is_ok());
    }

    #[test]
    fn rejects_zero_negative_and_non_finite_price() {
        for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                charge(price, vec![]).validate(),
                Err(AppError::BadRequest(_))
            ));
        }
    }

    #[test]
    fn accepts_whole_cents() {
        for price in [0.01, 2.5, 3.05, 12.99] {
            assert!(charge(price, vec![]).validate().is_ok(), "{}", price);
        }
    }

    /// Tests prices the ledger cannot debit exactly.
    ///
    /// Expected: Err(BadRequest) for sub-cent fractions and for prices rounding to 0.00
    #[test]
    fn rejects_fractional_cents() {
        for price in [0.004, 0.001, 3.005, 1.2345] {
            assert!(
                matches!(charge(price, vec![]).validate(), Err(AppError::BadRequest(_))),
                "{}",
                price
            );
        }
    }

    #[test]
    fn rejects_non_positive_line_item_amount() {
        let items = vec![LineItemParam {
            article_id: 1,
            amount: 0,
            price: 1.5,
        }];

        assert!(matches!(
            charge(3.0, items).validate(),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn allows_free_line_items() {
        let items = vec![LineItemParam {
            article_id: 1,
            amount: 2,
            price: 0.0,
        }];

        assert!(charge(3.0, items).validate().is_ok());
    }

    #[test]
    fn missing_date_defaults_to_now() {
        let before = Utc::now();
        let param = ChargeParam::from_dto(
            "bob".to_string(),
            CreateChargeDto {
                price: 3.0,
                date: None,
                line_items: vec![],
            },
        );

        assert!(param.date >= before);
    }
}
