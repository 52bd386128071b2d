use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::auth::token::JwtKeys,
};
use test_utils::{builder::TestBuilder, factory};

mod require;
mod require_admin;

fn keys() -> JwtKeys {
    JwtKeys::new(
        "middleware-test-secret-0123456789abcdef",
        chrono::Duration::hours(1),
    )
}

fn bearer(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

/// Issues a token for a stored user and returns headers carrying it.
async fn headers_for(db: &DatabaseConnection, keys: &JwtKeys, user_id: i32) -> HeaderMap {
    let user = UserRepository::new(db)
        .find_by_id(user_id)
        .await
        .unwrap()
        .unwrap();
    let token = keys.issue(&user).unwrap();

    bearer(&format!("Bearer {}", token))
}
