use super::*;

/// Tests moving an intent forward from its current status.
///
/// Expected: Ok(true) and the new status, transaction id and error stored
#[tokio::test]
async fn moves_intent_from_expected_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(ChargeIntent).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let intent = ChargeIntentFactory::new(db).status("debited").build().await?;

    let repo = ChargeIntentRepository::new(db);
    let moved = repo
        .transition(
            intent.id,
            ChargeStatus::Debited,
            ChargeStatus::Committed,
            Some(17),
            None,
        )
        .await?;

    assert!(moved);
    let stored = repo.find_by_id(intent.id).await?.unwrap();
    assert_eq!(stored.status, ChargeStatus::Committed);
    assert_eq!(stored.transaction_id, Some(17));
    assert!(stored.updated_at >= intent.updated_at);

    Ok(())
}

/// Tests that an intent which already moved on is left alone.
///
/// Expected: Ok(false) and the status unchanged
#[tokio::test]
async fn refuses_when_status_differs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(ChargeIntent).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let intent = ChargeIntentFactory::new(db)
        .status("committed")
        .build()
        .await?;

    let repo = ChargeIntentRepository::new(db);
    let moved = repo
        .transition(
            intent.id,
            ChargeStatus::Debited,
            ChargeStatus::Committed,
            Some(99),
            None,
        )
        .await?;

    assert!(!moved);
    let stored = repo.find_by_id(intent.id).await?.unwrap();
    assert_eq!(stored.status, ChargeStatus::Committed);
    assert!(stored.transaction_id.is_none());

    Ok(())
}

/// Tests that a second identical transition does not apply twice.
///
/// Expected: first Ok(true), second Ok(false)
#[tokio::test]
async fn applies_only_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(ChargeIntent).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let intent = ChargeIntentFactory::new(db).build().await?;

    let repo = ChargeIntentRepository::new(db);
    let first = repo
        .transition(
            intent.id,
            ChargeStatus::Pending,
            ChargeStatus::Failed,
            None,
            Some("SavaPage responded with status 500".to_string()),
        )
        .await?;
    let second = repo
        .transition(
            intent.id,
            ChargeStatus::Pending,
            ChargeStatus::Failed,
            None,
            None,
        )
        .await?;

    assert!(first);
    assert!(!second);
    let stored = repo.find_by_id(intent.id).await?.unwrap();
    assert_eq!(
        stored.error.as_deref(),
        Some("SavaPage responded with status 500")
    );

    Ok(())
}

/// Tests transitioning an intent that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(ChargeIntent).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChargeIntentRepository::new(db);

    assert!(!repo
        .transition(42, ChargeStatus::Pending, ChargeStatus::Failed, None, None)
        .await?);

    Ok(())
}
