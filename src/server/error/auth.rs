use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Token failed signature, format or expiry validation.
    #[error("Invalid access token: {0}")]
    InvalidToken(String),

    /// Token is valid but its subject no longer exists.
    #[error("User {0} from access token not found in database")]
    UserNotFound(i32),

    /// Authenticated user lacks a required role.
    ///
    /// # Fields
    /// - User ID
    /// - Description of what was attempted, for the server log
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Unknown email or wrong password during login.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration with an email that already has an account.
    #[error("Email {0} is already registered")]
    EmailTaken(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotFound` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `EmailTaken` → 409 Conflict
///
/// Details are logged at debug level; clients only see generic messages so token and
/// account probing learns nothing.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotFound(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You don't have permission to perform this action",
            ),
            Self::EmailTaken(_) => (StatusCode::CONFLICT, "Email is already registered"),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
