use axum::{http::StatusCode, response::IntoResponse};

use super::*;
use crate::server::error::{is_unique_violation, AppError};

/// Tests creating a user with its initial role.
///
/// Verifies that the repository inserts the user row and a single role row and
/// returns a domain user carrying that role.
///
/// Expected: Ok with roles == [USER]
#[tokio::test]
async fn creates_user_with_initial_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Kaori".to_string(),
            email: "kaori@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::User,
        })
        .await?;

    assert_eq!(user.name, "Kaori");
    assert_eq!(user.email, "kaori@example.com");
    assert_eq!(user.roles, vec![Role::User]);
    assert!(!user.is_admin());

    Ok(())
}

/// Tests that a second user with the same email is rejected by the database.
///
/// Verifies the error is recognized as a unique violation and answered with 409.
///
/// Expected: Err(DbErr) mapping to 409 Conflict
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            name: "Copy".to_string(),
            email: existing.email,
            password_hash: "hash".to_string(),
            role: Role::User,
        })
        .await;

    let err = result.expect_err("duplicate email must fail");
    assert!(is_unique_violation(&err));

    let response = AppError::from(err).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    Ok(())
}
