use crate::{
    model::user::Role,
    server::{error::AppError, model::user::GetAllUsersParam, service::user::UserService},
};
use test_utils::{builder::TestBuilder, factory};

/// Tests page metadata and clamping of the page size.
///
/// Expected: 5 users at 2 per page gives 3 pages; per_page 0 is clamped to 1
#[tokio::test]
async fn paginates_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_user(db).await?;
    }

    let service = UserService::new(db);

    let page = service
        .get_all_users(GetAllUsersParam {
            page: 2,
            per_page: 2,
        })
        .await?;
    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.users.len(), 1);

    let clamped = service
        .get_all_users(GetAllUsersParam {
            page: 0,
            per_page: 0,
        })
        .await?;
    assert_eq!(clamped.per_page, 1);
    assert_eq!(clamped.total_pages, 5);

    Ok(())
}

/// Tests granting and revoking the admin role.
///
/// Expected: role added then removed; USER role kept
#[tokio::test]
async fn grants_and_revokes_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let user = factory::create_user(db).await?;

    let service = UserService::new(db);

    let promoted = service.add_admin(user.id).await?;
    assert_eq!(promoted.roles, vec![Role::Admin, Role::User]);

    let demoted = service.remove_admin(admin.id, user.id).await?;
    assert_eq!(demoted.roles, vec![Role::User]);

    Ok(())
}

/// Tests that admins cannot demote themselves and unknown users are reported.
///
/// Expected: BadRequest for self, NotFound for a missing user
#[tokio::test]
async fn rejects_invalid_role_changes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let service = UserService::new(db);

    assert!(matches!(
        service.remove_admin(admin.id, admin.id).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.add_admin(admin.id + 100).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
