use super::*;

/// Tests recording a sale.
///
/// Expected: Ok with date and price stored as given
#[tokio::test]
async fn creates_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_transaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc::now();
    let repo = TransactionRepository::new(db);
    let transaction = repo.create(date, 3.0).await?;

    assert_eq!(transaction.price, 3.0);
    assert_eq!(transaction.date.timestamp(), date.timestamp());
    assert_eq!(
        entity::prelude::Transaction::find().count(db).await?,
        1
    );

    Ok(())
}
