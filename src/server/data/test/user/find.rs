use super::*;

/// Tests loading a user by ID includes every role.
///
/// Expected: Ok(Some) with ADMIN and USER roles
#[tokio::test]
async fn finds_by_id_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(admin.id).await?.unwrap();

    assert_eq!(user.id, admin.id);
    assert_eq!(user.roles, vec![Role::Admin, Role::User]);

    Ok(())
}

/// Tests that unknown IDs return None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(404).await?.is_none());

    Ok(())
}

/// Tests lookup by email and the email_exists check.
///
/// Expected: user found, exists true for its email and false for another
#[tokio::test]
async fn finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("reader@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("reader@example.com").await?.unwrap();

    assert_eq!(found.id, created.id);
    assert!(repo.email_exists("reader@example.com").await?);
    assert!(!repo.email_exists("other@example.com").await?);
    assert!(repo.find_by_email("other@example.com").await?.is_none());

    Ok(())
}
