use super::*;

/// Tests listing the directory.
///
/// Expected: Ok with every resident ordered by name
#[tokio::test]
async fn returns_residents_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Resident).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ResidentFactory::new(db).name("carol").build().await?;
    ResidentFactory::new(db).name("alice").build().await?;
    ResidentFactory::new(db).name("bob").build().await?;

    let repo = ResidentRepository::new(db);
    let names: Vec<String> = repo.get_all().await?.into_iter().map(|r| r.name).collect();

    assert_eq!(names, vec!["alice", "bob", "carol"]);

    Ok(())
}

/// Tests listing an empty directory.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_residents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Resident).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResidentRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
