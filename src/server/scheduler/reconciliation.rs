use std::time::Duration;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::reconcile::ReconcileService};

/// Starts the charge intent reconciliation scheduler.
///
/// Each run records debit-confirmed charges that were never written locally and flags
/// charges whose ledger outcome is unknown.
///
/// # Arguments
/// - `db`: Database connection
/// - `schedule`: Cron expression with seconds, e.g. `0 * * * * *` for every minute
/// - `grace`: Minimum age of an intent before a run touches it
pub async fn start_scheduler(
    db: DatabaseConnection,
    schedule: &str,
    grace: Duration,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            match ReconcileService::new(&db).sweep(grace).await {
                Ok(report) if report.committed + report.flagged + report.failed > 0 => {
                    tracing::info!(
                        "Reconciliation: {} recovered, {} flagged for review, {} failed",
                        report.committed,
                        report.flagged,
                        report.failed
                    );
                }
                Ok(_) => {}
                Err(e) => tracing::error!("Error reconciling charge intents: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Charge reconciliation scheduler started ({})", schedule);

    Ok(scheduler)
}
