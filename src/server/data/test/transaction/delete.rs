use super::*;

/// Tests deleting a transaction with line items.
///
/// Expected: Ok(true) and neither the transaction nor its line items remain
#[tokio::test]
async fn deletes_transaction_and_line_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_transaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article) = create_article_with_type(db).await?;
    let (transaction, _) = TransactionFactory::new(db)
        .build_with_line_item(article.id, 2)
        .await?;

    let repo = TransactionRepository::new(db);

    assert!(repo.delete(transaction.id).await?);
    assert!(repo.find_by_id(transaction.id).await?.is_none());
    assert_eq!(
        entity::prelude::ArticleTransaction::find().count(db).await?,
        0
    );

    Ok(())
}

/// Tests deleting a transaction that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_transaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TransactionRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}
