use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with the ADMIN role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let admin = factory::create_admin(db).await?;
    let headers = headers_for(db, &keys, admin.id).await;

    let user = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert!(user.is_admin());

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied) naming the user
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let user = factory::create_user(db).await?;
    let headers = headers_for(db, &keys, user.id).await;

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("ADMIN"));
        }
        other => panic!("Expected AccessDenied, got {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests a revoked admin role takes effect before the token expires.
///
/// Expected: token issued while admin is denied after the role is removed
#[tokio::test]
async fn reads_roles_from_database() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let admin = factory::create_admin(db).await?;
    let headers = headers_for(db, &keys, admin.id).await;

    UserRepository::new(db)
        .remove_role(admin.id, crate::model::user::Role::Admin)
        .await?;

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
