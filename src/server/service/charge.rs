//! Charge flow: debit a resident's SavaPage account and record the sale.
//!
//! A sale is only recorded locally after the ledger confirmed the debit. Every charge is
//! first written down as a `pending` charge intent so that a debit whose local record
//! could not be written is not lost: the intent stays `debited` and the reconciliation
//! sweep records it later.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        article::ArticleRepository, charge_intent::ChargeIntentRepository,
        transaction::TransactionRepository,
    },
    error::AppError,
    ledger::CreditLedger,
    model::{
        charge_intent::{ChargeStatus, CHARGE_DETAILS},
        transaction::{ChargeParam, Transaction},
    },
};

pub struct ChargeService<'a> {
    db: &'a DatabaseConnection,
    ledger: &'a dyn CreditLedger,
}

impl<'a> ChargeService<'a> {
    pub fn new(db: &'a DatabaseConnection, ledger: &'a dyn CreditLedger) -> Self {
        Self { db, ledger }
    }

    /// Debits `param.price` from the resident's account and records the transaction.
    ///
    /// # Arguments
    /// - `param` - Resident name, price in whole cents, date and optional line items
    ///
    /// # Returns
    /// - `Ok(Transaction)` - Debit confirmed and transaction recorded
    /// - `Err(AppError::BadRequest)` - Invalid price or line items, or unknown articles;
    ///   the ledger was not called
    /// - `Err(AppError::LedgerChargeFailed)` - The ledger did not confirm the debit; no
    ///   transaction was recorded
    /// - `Err(AppError::DbErr)` - Recording failed after a confirmed debit; the intent
    ///   stays `debited` for the reconciliation sweep
    /// - `Err(AppError::InternalError)` - Debit confirmed but the intent was already closed
    ///   by an operator; nothing was recorded
    pub async fn charge(&self, param: ChargeParam) -> Result<Transaction, AppError> {
        param.validate()?;
        self.ensure_articles_exist(&param).await?;

        let intents = ChargeIntentRepository::new(self.db);
        let intent = intents.create(&param).await?;

        if let Err(e) = self
            .ledger
            .adjust(&param.resident_name, -param.price, CHARGE_DETAILS)
            .await
        {
            tracing::warn!(
                "Debit of {:.2} for {} was not confirmed: {}",
                param.price,
                param.resident_name,
                e
            );

            match intents
                .transition(
                    intent.id,
                    ChargeStatus::Pending,
                    ChargeStatus::Failed,
                    None,
                    Some(e.to_string()),
                )
                .await
            {
                Ok(true) => {}
                Ok(false) => tracing::warn!(
                    "Charge intent {} left pending state before it could be marked failed",
                    intent.id
                ),
                Err(db_err) => tracing::error!(
                    "Failed to mark charge intent {} as failed: {}",
                    intent.id,
                    db_err
                ),
            }

            return Err(AppError::LedgerChargeFailed(e));
        }

        self.mark_debited(&intents, intent.id).await?;

        match commit_charge(self.db, intent.id, &param).await {
            Ok(Some(transaction)) => {
                tracing::info!(
                    "Charged {} {:.2}, recorded transaction {}",
                    param.resident_name,
                    param.price,
                    transaction.id
                );
                Ok(transaction)
            }
            Ok(None) => Err(AppError::InternalError(format!(
                "Charge intent {} was committed by another worker",
                intent.id
            ))),
            Err(e) => {
                tracing::error!(
                    "Debit for charge intent {} confirmed but recording failed, left for reconciliation: {}",
                    intent.id,
                    e
                );
                Err(e)
            }
        }
    }

    /// Moves an intent to `debited` once the ledger confirmed its debit.
    ///
    /// A slow ledger call can outlast the grace period, in which case the sweep has already
    /// flagged the intent `needs_review`. The confirmed debit settles that question, so the
    /// intent is taken back to `debited` and recorded by this request.
    async fn mark_debited(
        &self,
        intents: &ChargeIntentRepository<'_, DatabaseConnection>,
        intent_id: i32,
    ) -> Result<(), AppError> {
        let debited = intents
            .transition(
                intent_id,
                ChargeStatus::Pending,
                ChargeStatus::Debited,
                None,
                None,
            )
            .await;

        let moved = match debited {
            Ok(true) => true,
            Ok(false) => {
                let reclaimed = intents
                    .transition(
                        intent_id,
                        ChargeStatus::NeedsReview,
                        ChargeStatus::Debited,
                        None,
                        None,
                    )
                    .await?;
                if reclaimed {
                    tracing::warn!(
                        "Charge intent {} was flagged for review while its debit was in flight; ledger confirmed it",
                        intent_id
                    );
                }
                reclaimed
            }
            Err(e) => {
                tracing::error!(
                    "Debit for charge intent {} confirmed but intent could not be updated: {}",
                    intent_id,
                    e
                );
                return Err(e.into());
            }
        };

        if !moved {
            let status = intents
                .find_by_id(intent_id)
                .await?
                .map(|i| i.status.to_string())
                .unwrap_or_else(|| "missing".to_string());
            tracing::error!(
                "Debit for charge intent {} confirmed but intent is {}; record it by hand",
                intent_id,
                status
            );
            return Err(AppError::InternalError(format!(
                "Debit for charge intent {} confirmed but intent is {}",
                intent_id, status
            )));
        }

        Ok(())
    }

    async fn ensure_articles_exist(&self, param: &ChargeParam) -> Result<(), AppError> {
        let article_ids: Vec<i32> = param.line_items.iter().map(|i| i.article_id).collect();
        let missing = ArticleRepository::new(self.db)
            .missing_ids(&article_ids)
            .await?;

        if !missing.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Unknown article ids: {:?}",
                missing
            )));
        }

        Ok(())
    }
}

/// Records the transaction for a `debited` intent and marks the intent `committed`.
///
/// Runs in one database transaction. The status change is conditional on the intent still
/// being `debited`, so a charge is recorded at most once even when the request and the
/// reconciliation sweep race.
///
/// # Returns
/// - `Ok(Some(Transaction))` - Transaction recorded and intent committed
/// - `Ok(None)` - The intent was no longer `debited`; nothing was written
/// - `Err(AppError::DbErr)` - Database error; nothing was written
pub(crate) async fn commit_charge(
    db: &DatabaseConnection,
    intent_id: i32,
    charge: &ChargeParam,
) -> Result<Option<Transaction>, AppError> {
    let txn = db.begin().await?;

    let transactions = TransactionRepository::new(&txn);
    let transaction = transactions.create(charge.date, charge.price).await?;
    transactions
        .create_line_items(transaction.id, &charge.line_items)
        .await?;

    let committed = ChargeIntentRepository::new(&txn)
        .transition(
            intent_id,
            ChargeStatus::Debited,
            ChargeStatus::Committed,
            Some(transaction.id),
            None,
        )
        .await?;

    if !committed {
        txn.rollback().await?;
        return Ok(None);
    }

    txn.commit().await?;

    Ok(Some(transaction))
}
