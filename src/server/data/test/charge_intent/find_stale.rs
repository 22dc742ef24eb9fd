use super::*;

/// Tests selecting intents stuck in a status past the cutoff.
///
/// Expected: Ok with only old intents in the requested status, oldest first
#[tokio::test]
async fn returns_old_intents_in_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(ChargeIntent).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let oldest = ChargeIntentFactory::new(db)
        .status("debited")
        .updated_at(now - Duration::minutes(10))
        .build()
        .await?;
    let old = ChargeIntentFactory::new(db)
        .status("debited")
        .updated_at(now - Duration::minutes(2))
        .build()
        .await?;
    // Within the grace period.
    ChargeIntentFactory::new(db)
        .status("debited")
        .updated_at(now)
        .build()
        .await?;
    // Old, but another status.
    ChargeIntentFactory::new(db)
        .status("pending")
        .updated_at(now - Duration::minutes(10))
        .build()
        .await?;

    let repo = ChargeIntentRepository::new(db);
    let ids: Vec<i32> = repo
        .find_stale(ChargeStatus::Debited, now - Duration::seconds(30))
        .await?
        .into_iter()
        .map(|i| i.id)
        .collect();

    assert_eq!(ids, vec![oldest.id, old.id]);

    Ok(())
}
