use super::*;

/// Tests that existing articles are not reported.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_all_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_transaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = create_article_with_type(db).await?;
    let (_, second) = create_article_with_type(db).await?;

    let repo = ArticleRepository::new(db);

    assert!(repo.missing_ids(&[first.id, second.id]).await?.is_empty());

    Ok(())
}

/// Tests reporting unknown article ids.
///
/// Expected: Ok with the unknown ids sorted and without duplicates
#[tokio::test]
async fn returns_unknown_ids_sorted_and_deduplicated() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_transaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article) = create_article_with_type(db).await?;

    let repo = ArticleRepository::new(db);
    let missing = repo
        .missing_ids(&[900, article.id, 800, 900])
        .await?;

    assert_eq!(missing, vec![800, 900]);

    Ok(())
}

/// Tests an empty request.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_transaction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);

    assert!(repo.missing_ids(&[]).await?.is_empty());

    Ok(())
}
