use super::*;

/// Tests granting ADMIN and that granting it twice keeps a single row.
///
/// Expected: roles == [ADMIN, USER]
#[tokio::test]
async fn add_role_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.add_role(user.id, Role::Admin).await?;
    repo.add_role(user.id, Role::Admin).await?;

    let user = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(user.roles, vec![Role::Admin, Role::User]);

    Ok(())
}

/// Tests removing a role leaves the other roles in place.
///
/// Expected: roles == [USER]
#[tokio::test]
async fn removes_only_requested_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let repo = UserRepository::new(db);
    repo.remove_role(admin.id, Role::Admin).await?;
    // Removing a role the user no longer has is a no-op
    repo.remove_role(admin.id, Role::Admin).await?;

    let user = repo.find_by_id(admin.id).await?.unwrap();
    assert_eq!(user.roles, vec![Role::User]);

    Ok(())
}
