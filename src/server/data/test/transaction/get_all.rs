use super::*;

/// Tests listing transactions.
///
/// Expected: Ok with newest transaction first
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_transaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let old = TransactionFactory::new(db)
        .date(now - Duration::days(2))
        .build()
        .await?;
    let newest = TransactionFactory::new(db).date(now).build().await?;
    let middle = TransactionFactory::new(db)
        .date(now - Duration::days(1))
        .build()
        .await?;

    let repo = TransactionRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.into_iter().map(|t| t.id).collect();

    assert_eq!(ids, vec![newest.id, middle.id, old.id]);

    Ok(())
}
