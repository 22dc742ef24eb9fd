use super::*;

/// Tests loading a transaction with its line items.
///
/// Expected: Ok(Some) with only this transaction's line items
#[tokio::test]
async fn returns_transaction_with_its_line_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_transaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article) = create_article_with_type(db).await?;
    let (transaction, line_item) = TransactionFactory::new(db)
        .price(6.0)
        .build_with_line_item(article.id, 3)
        .await?;
    TransactionFactory::new(db)
        .build_with_line_item(article.id, 1)
        .await?;

    let repo = TransactionRepository::new(db);
    let found = repo.find_with_line_items(transaction.id).await?.unwrap();

    assert_eq!(found.transaction.id, transaction.id);
    assert_eq!(found.transaction.price, 6.0);
    assert_eq!(found.line_items.len(), 1);
    assert_eq!(found.line_items[0].id, line_item.id);
    assert_eq!(found.line_items[0].amount, 3);

    Ok(())
}

/// Tests loading a transaction that does not exist.
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

    assert!(repo.find_with_line_items(42).await?.is_none());

    Ok(())
}
