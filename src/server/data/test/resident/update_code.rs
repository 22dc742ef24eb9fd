use super::*;

/// Tests assigning a new card to a resident.
///
/// Expected: Ok(Some) and the old code no longer resolves
#[tokio::test]
async fn replaces_card_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Resident).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ResidentFactory::new(db)
        .name("alice")
        .code("OLD111")
        .build()
        .await?;

    let repo = ResidentRepository::new(db);
    let updated = repo
        .update_code("alice", "NEW222".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.code, "NEW222");
    assert!(repo.find_by_code("OLD111").await?.is_none());
    assert_eq!(repo.find_by_code("NEW222").await?.unwrap().name, "alice");

    Ok(())
}

/// Tests updating a resident that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_resident() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Resident).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResidentRepository::new(db);

    assert!(repo
        .update_code("nobody", "NEW222".to_string())
        .await?
        .is_none());

    Ok(())
}

/// Tests taking over another resident's code.
///
/// Expected: Err
#[tokio::test]
async fn rejects_code_owned_by_another_resident() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Resident).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ResidentFactory::new(db)
        .name("alice")
        .code("ABC123")
        .build()
        .await?;
    ResidentFactory::new(db).name("bob").code("XYZ789").build().await?;

    let repo = ResidentRepository::new(db);

    assert!(repo.update_code("bob", "ABC123".to_string()).await.is_err());

    Ok(())
}
