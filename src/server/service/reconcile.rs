//! Charge intent reconciliation.
//!
//! The sweep closes the gap between a confirmed ledger debit and its local record:
//! - `debited` intents past the grace period are recorded from the data stored on the
//!   intent.
//! - `pending` intents past the grace period have an unknown ledger outcome. They cannot be
//!   retried safely, so they are flagged `needs_review` for an operator.
//!
//! Operators list intents and close the ones they have settled by hand.

use std::time::Duration;

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::charge_intent::ChargeIntentRepository,
    error::AppError,
    model::charge_intent::{ChargeIntent, ChargeStatus},
    service::charge::commit_charge,
};

const NEEDS_REVIEW_REASON: &str = "Ledger outcome unknown: charge did not complete";

/// Outcome of one sweep.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// Debited intents recorded by this sweep.
    pub committed: usize,
    /// Pending intents flagged for review.
    pub flagged: usize,
    /// Intents another worker handled first.
    pub skipped: usize,
    /// Intents that could not be recorded; retried next sweep.
    pub failed: usize,
}

pub struct ReconcileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReconcileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Recovers debited intents and flags stale pending ones.
    ///
    /// # Arguments
    /// - `grace` - Minimum age of an intent before the sweep touches it, so requests still
    ///   in flight are left alone
    ///
    /// # Returns
    /// - `Ok(SweepReport)` - Counts of what the sweep did
    /// - `Err(AppError)` - Stale intents could not be loaded
    pub async fn sweep(&self, grace: Duration) -> Result<SweepReport, AppError> {
        let grace = chrono::Duration::from_std(grace)
            .map_err(|e| AppError::InternalError(format!("Invalid grace period: {}", e)))?;
        let cutoff = Utc::now() - grace;

        let repo = ChargeIntentRepository::new(self.db);
        let mut report = SweepReport::default();

        for intent in repo.find_stale(ChargeStatus::Debited, cutoff).await? {
            match commit_charge(self.db, intent.id, &intent.to_charge()).await {
                Ok(Some(transaction)) => {
                    tracing::info!(
                        "Recovered charge intent {} for {}: recorded transaction {}",
                        intent.id,
                        intent.resident_name,
                        transaction.id
                    );
                    report.committed += 1;
                }
                Ok(None) => report.skipped += 1,
                Err(e) => {
                    tracing::error!("Failed to recover charge intent {}: {}", intent.id, e);
                    report.failed += 1;
                }
            }
        }

        for intent in repo.find_stale(ChargeStatus::Pending, cutoff).await? {
            let flagged = repo
                .transition(
                    intent.id,
                    ChargeStatus::Pending,
                    ChargeStatus::NeedsReview,
                    None,
                    Some(NEEDS_REVIEW_REASON.to_string()),
                )
                .await?;

            if flagged {
                tracing::error!(
                    "Charge intent {} ({} {:.2}) never completed, ledger state unknown; needs review",
                    intent.id,
                    intent.resident_name,
                    intent.price
                );
                report.flagged += 1;
            } else {
                report.skipped += 1;
            }
        }

        Ok(report)
    }

    /// Lists intents, newest first, optionally only those in `status`.
    pub async fn list(&self, status: Option<ChargeStatus>) -> Result<Vec<ChargeIntent>, AppError> {
        ChargeIntentRepository::new(self.db)
            .get_by_status(status)
            .await
    }

    /// Closes an intent an operator has settled by hand.
    ///
    /// # Arguments
    /// - `id` - Intent to close
    /// - `note` - Optional operator note stored on the intent
    ///
    /// # Returns
    /// - `Ok(ChargeIntent)` - The intent, now `resolved`
    /// - `Err(AppError::NotFound)` - No intent with that id
    /// - `Err(AppError::BadRequest)` - The intent is not `debited` or `needs_review`
    pub async fn resolve(&self, id: i32, note: Option<String>) -> Result<ChargeIntent, AppError> {
        let repo = ChargeIntentRepository::new(self.db);

        let intent = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Charge intent {} not found", id)))?;

        if !intent.status.is_resolvable() {
            return Err(AppError::BadRequest(format!(
                "Charge intent {} is {} and cannot be resolved",
                id, intent.status
            )));
        }

        let resolved = repo
            .transition(id, intent.status, ChargeStatus::Resolved, None, note)
            .await?;

        if !resolved {
            return Err(AppError::BadRequest(format!(
                "Charge intent {} changed while resolving, reload and retry",
                id
            )));
        }

        tracing::info!("Charge intent {} resolved by operator", id);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Charge intent {} not found", id)))
    }
}
