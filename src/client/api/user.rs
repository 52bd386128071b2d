use crate::{
    client::{
        api::helper::{delete, get, parse_response, post, send_request},
        model::error::ApiError,
    },
    model::user::{PaginatedUsersDto, UserDto},
};

pub async fn get_users(page: u64, entries: u64) -> Result<PaginatedUsersDto, ApiError> {
    let url = format!("/api/users?page={}&entries={}", page, entries);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn add_admin(user_id: i32) -> Result<UserDto, ApiError> {
    let url = format!("/api/users/{}/admin", user_id);
    let response = send_request(post(&url)).await?;
    parse_response(response).await
}

pub async fn remove_admin(user_id: i32) -> Result<UserDto, ApiError> {
    let url = format!("/api/users/{}/admin", user_id);
    let response = send_request(delete(&url)).await?;
    parse_response(response).await
}
