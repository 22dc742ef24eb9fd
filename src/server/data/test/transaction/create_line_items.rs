use super::*;

/// Tests attaching line items to a transaction.
///
/// Expected: Ok with one line item per input, in order
#[tokio::test]
async fn creates_line_items_for_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_transaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, beer) = create_article_with_type(db).await?;
    let (_, chips) = create_article_with_type(db).await?;
    let transaction = TransactionFactory::new(db).price(4.0).build().await?;

    let repo = TransactionRepository::new(db);
    let items = repo
        .create_line_items(
            transaction.id,
            &[
                LineItemParam {
                    article_id: beer.id,
                    amount: 2,
                    price: 1.5,
                },
                LineItemParam {
                    article_id: chips.id,
                    amount: 1,
                    price: 1.0,
                },
            ],
        )
        .await?;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].article_id, beer.id);
    assert_eq!(items[0].amount, 2);
    assert_eq!(items[1].article_id, chips.id);
    assert!(items.iter().all(|i| i.transaction_id == transaction.id));

    Ok(())
}

/// Tests that a line item must reference an existing article.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_transaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let transaction = TransactionFactory::new(db).build().await?;

    let repo = TransactionRepository::new(db);
    let result = repo
        .create_line_items(
            transaction.id,
            &[LineItemParam {
                article_id: 999,
                amount: 1,
                price: 1.0,
            }],
        )
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests attaching no line items.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn accepts_empty_line_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_transaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let transaction = TransactionFactory::new(db).build().await?;

    let repo = TransactionRepository::new(db);

    assert!(repo.create_line_items(transaction.id, &[]).await?.is_empty());

    Ok(())
}
