use super::*;

/// Tests correcting the price of a transaction.
///
/// Expected: Ok(Some) with the new price and the original date
#[tokio::test]
async fn updates_price_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_transaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let transaction = TransactionFactory::new(db).price(3.0).build().await?;

    let repo = TransactionRepository::new(db);
    let updated = repo
        .update(
            transaction.id,
            UpdateTransactionParam {
                date: None,
                price: Some(2.5),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, 2.5);
    assert_eq!(updated.date.timestamp(), transaction.date.timestamp());

    Ok(())
}

/// Tests correcting the date of a transaction.
///
/// Expected: Ok(Some) with the new date and the original price
#[tokio::test]
async fn updates_date_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_transaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let transaction = TransactionFactory::new(db).price(3.0).build().await?;
    let new_date = transaction.date - Duration::hours(5);

    let repo = TransactionRepository::new(db);
    let updated = repo
        .update(
            transaction.id,
            UpdateTransactionParam {
                date: Some(new_date),
                price: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.date.timestamp(), new_date.timestamp());
    assert_eq!(updated.price, 3.0);

    Ok(())
}

/// Tests updating a transaction that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_transaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TransactionRepository::new(db);

    assert!(repo
        .update(42, UpdateTransactionParam::default())
        .await?
        .is_none());

    Ok(())
}
