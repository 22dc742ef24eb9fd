use super::*;

/// Tests resolving a card code to its resident.
///
/// Expected: Ok(Some) with the resident owning the code
#[tokio::test]
async fn finds_resident_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Resident).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ResidentFactory::new(db)
        .name("alice")
        .code("ABC123")
        .build()
        .await?;
    ResidentFactory::new(db).name("bob").code("XYZ789").build().await?;

    let repo = ResidentRepository::new(db);
    let resident = repo.find_by_code("ABC123").await?.unwrap();

    assert_eq!(resident.name, "alice");

    Ok(())
}

/// Tests an unregistered code.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Resident).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ResidentFactory::new(db).code("ABC123").build().await?;

    let repo = ResidentRepository::new(db);

    assert!(repo.find_by_code("XYZ").await?.is_none());

    Ok(())
}

/// Tests that code matching is exact.
///
/// Expected: Ok(None) for a code differing only in case
#[tokio::test]
async fn code_match_is_case_sensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Resident).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ResidentFactory::new(db).code("ABC123").build().await?;

    let repo = ResidentRepository::new(db);

    assert!(repo.find_by_code("abc123").await?.is_none());

    Ok(())
}
