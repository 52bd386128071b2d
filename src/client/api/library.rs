use crate::{
    client::{
        api::helper::{get, parse_response, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::library::{
        LibraryTitleDto, NotificationPreferenceDto, UpdateVolumeProgressDto, VolumeProgressDto,
    },
};

pub async fn get_my_titles() -> Result<Vec<LibraryTitleDto>, ApiError> {
    let response = send_request(get("/api/user/titles")).await?;
    parse_response(response).await
}

pub async fn get_volume_progress(title_id: i32) -> Result<Vec<VolumeProgressDto>, ApiError> {
    let url = format!("/api/user/titles/{}/volumes", title_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn update_volume_progress(
    title_id: i32,
    volumes: Vec<VolumeProgressDto>,
) -> Result<Vec<VolumeProgressDto>, ApiError> {
    let url = format!("/api/user/titles/{}/volumes", title_id);
    let body = serialize_json(&UpdateVolumeProgressDto { volumes })?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn get_notification_preference(
    title_id: i32,
) -> Result<NotificationPreferenceDto, ApiError> {
    let url = format!("/api/user/titles/{}/notifications", title_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn set_notification_preference(
    title_id: i32,
    email_on_new_volume: bool,
) -> Result<NotificationPreferenceDto, ApiError> {
    let url = format!("/api/user/titles/{}/notifications", title_id);
    let body = serialize_json(&NotificationPreferenceDto {
        email_on_new_volume,
    })?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}
