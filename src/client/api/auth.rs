use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        auth::{AuthResponseDto, LoginDto, RegisterDto},
        user::UserDto,
    },
};

pub async fn login(payload: LoginDto) -> Result<AuthResponseDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/auth/login").body(body)).await?;
    parse_response(response).await
}

pub async fn register(payload: RegisterDto) -> Result<AuthResponseDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/auth/register").body(body)).await?;
    parse_response(response).await
}

/// Profile for the stored token; `Ok(None)` when the token is missing or rejected.
pub async fn get_me() -> Result<Option<UserDto>, ApiError> {
    if crate::client::model::auth::stored_token().is_none() {
        return Ok(None);
    }

    let response = send_request(get("/api/auth/me")).await?;
    match parse_response(response).await {
        Ok(user) => Ok(Some(user)),
        Err(e) if e.is_unauthorized() => Ok(None),
        Err(e) => Err(e),
    }
}
