use super::*;

/// Tests registering a new resident.
///
/// Expected: Ok with the name and code stored as given
#[tokio::test]
async fn creates_resident() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Resident).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResidentRepository::new(db);
    let resident = repo
        .create(CreateResidentParam {
            name: "alice".to_string(),
            code: "ABC123".to_string(),
        })
        .await?;

    assert_eq!(resident.name, "alice");
    assert_eq!(resident.code, "ABC123");

    Ok(())
}

/// Tests that a card code can only belong to one resident.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Resident).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ResidentFactory::new(db).code("ABC123").build().await?;

    let repo = ResidentRepository::new(db);
    let result = repo
        .create(CreateResidentParam {
            name: "bob".to_string(),
            code: "ABC123".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that a name can only be registered once.
///
/// Expected: Err
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Resident).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ResidentFactory::new(db).name("alice").build().await?;

    let repo = ResidentRepository::new(db);
    let result = repo
        .create(CreateResidentParam {
            name: "alice".to_string(),
            code: "NEW999".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
