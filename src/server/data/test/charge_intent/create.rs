use super::*;

/// Tests recording a charge before the ledger is called.
///
/// Expected: Ok with status pending, the charge details label and the line items preserved
#[tokio::test]
async fn creates_pending_intent_with_line_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(ChargeIntent).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let line_items = vec![LineItemParam {
        article_id: 4,
        amount: 2,
        price: 1.5,
    }];

    let repo = ChargeIntentRepository::new(db);
    let intent = repo
        .create(&ChargeParam {
            resident_name: "bob".to_string(),
            price: 3.0,
            date: Utc::now(),
            line_items: line_items.clone(),
        })
        .await?;

    assert_eq!(intent.status, ChargeStatus::Pending);
    assert_eq!(intent.resident_name, "bob");
    assert_eq!(intent.price, 3.0);
    assert_eq!(intent.details, CHARGE_DETAILS);
    assert_eq!(intent.line_items, line_items);
    assert!(intent.transaction_id.is_none());

    let stored = repo.find_by_id(intent.id).await?.unwrap();
    assert_eq!(stored.line_items, line_items);

    Ok(())
}
