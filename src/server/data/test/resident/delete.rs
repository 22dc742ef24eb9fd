use super::*;

/// Tests removing a resident from the directory.
///
/// Expected: Ok(true) and the resident is gone
#[tokio::test]
async fn deletes_resident() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Resident).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ResidentFactory::new(db).name("alice").build().await?;

    let repo = ResidentRepository::new(db);

    assert!(repo.delete("alice").await?);
    assert!(repo.find_by_name("alice").await?.is_none());

    Ok(())
}

/// Tests deleting a resident that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_resident() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Resident).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResidentRepository::new(db);

    assert!(!repo.delete("nobody").await?);

    Ok(())
}
