use super::*;

/// Tests an authenticated request without permissions resolves the user.
///
/// Expected: Ok(User) matching the token subject
#[tokio::test]
async fn resolves_token_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let user = factory::user::UserFactory::new(db)
        .name("Reader")
        .build()
        .await?;
    let headers = headers_for(db, &keys, user.id).await;

    let resolved = AuthGuard::new(db, &keys, &headers).require(&[]).await?;

    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.name, "Reader");

    Ok(())
}

/// Tests requests without a usable Authorization header.
///
/// Expected: Err(AuthError::MissingToken) for absent, empty and non-bearer headers
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    for headers in [HeaderMap::new(), bearer("Bearer "), bearer("Basic dXNlcjpwYXNz")] {
        let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::MissingToken))
        ));
    }

    Ok(())
}

/// Tests a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let foreign = JwtKeys::new(
        "another-secret-another-secret-another",
        chrono::Duration::hours(1),
    );
    let headers = headers_for(db, &foreign, user.id).await;

    let result = AuthGuard::new(db, &keys(), &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user was deleted.
///
/// Expected: Err(AuthError::UserNotFound) with the token subject
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let user = factory::create_user(db).await?;
    let headers = headers_for(db, &keys, user.id).await;

    entity::prelude::UserRole::delete_many().exec(db).await?;
    entity::prelude::User::delete_by_id(user.id).exec(db).await?;

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(id))) if id == user.id
    ));

    Ok(())
}
