use super::*;

/// Tests filtering intents by status.
///
/// Expected: Ok with only intents in the requested status
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(ChargeIntent).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ChargeIntentFactory::new(db).status("committed").build().await?;
    let review = ChargeIntentFactory::new(db)
        .status("needs_review")
        .build()
        .await?;
    ChargeIntentFactory::new(db).status("failed").build().await?;

    let repo = ChargeIntentRepository::new(db);
    let intents = repo.get_by_status(Some(ChargeStatus::NeedsReview)).await?;

    assert_eq!(intents.len(), 1);
    assert_eq!(intents[0].id, review.id);

    Ok(())
}

/// Tests listing without a filter.
///
/// Expected: Ok with every intent, newest first
#[tokio::test]
async fn returns_all_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(ChargeIntent).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = ChargeIntentFactory::new(db)
        .updated_at(now - Duration::minutes(5))
        .build()
        .await?;
    let newer = ChargeIntentFactory::new(db)
        .status("committed")
        .updated_at(now)
        .build()
        .await?;

    let repo = ChargeIntentRepository::new(db);
    let ids: Vec<i32> = repo
        .get_by_status(None)
        .await?
        .into_iter()
        .map(|i| i.id)
        .collect();

    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests that a row with an unknown status is reported instead of skipped.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(ChargeIntent).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ChargeIntentFactory::new(db).status("refunded").build().await?;

    let repo = ChargeIntentRepository::new(db);

    assert!(matches!(
        repo.get_by_status(None).await,
        Err(AppError::InternalErr(_))
    ));

    Ok(())
}
