use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        library::{
            LibraryTitleDto, NotificationPreferenceDto, UpdateVolumeProgressDto, VolumeProgressDto,
        },
    },
    server::{
        error::AppError,
        extract::{Json, Path},
        middleware::auth::AuthGuard,
        model::library::VolumeProgress,
        service::library::LibraryService,
        state::AppState,
    },
};

/// Tag for grouping the current user's library endpoints in OpenAPI documentation
pub static LIBRARY_TAG: &str = "library";

/// Titles in which the current user owns at least one volume.
#[utoipa::path(
    get,
    path = "/api/user/titles",
    tag = LIBRARY_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Collected titles with owned and total counts", body = ApiResponse<Vec<LibraryTitleDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_titles(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let titles = LibraryService::new(&state.db).my_titles(user.id).await?;

    let titles: Vec<LibraryTitleDto> = titles.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(titles))))
}

/// Ownership of every volume of a title for the current user.
#[utoipa::path(
    get,
    path = "/api/user/titles/{id}/volumes",
    tag = LIBRARY_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Title ID")),
    responses(
        (status = 200, description = "Ownership per volume", body = ApiResponse<Vec<VolumeProgressDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Title not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_volume_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let progress = LibraryService::new(&state.db)
        .volume_progress(user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(progress_dto(progress)))))
}

/// Mark volumes of a title as owned or not owned.
///
/// # Returns
/// - `200 OK` - Ownership of every volume after the update
/// - `400 Bad Request` - A volume does not belong to the title
/// - `404 Not Found` - Title not found
#[utoipa::path(
    put,
    path = "/api/user/titles/{id}/volumes",
    tag = LIBRARY_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Title ID")),
    request_body = UpdateVolumeProgressDto,
    responses(
        (status = 200, description = "Ownership updated", body = ApiResponse<Vec<VolumeProgressDto>>),
        (status = 400, description = "Volume outside the title", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Title not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_volume_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateVolumeProgressDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let entries = payload
        .volumes
        .into_iter()
        .map(VolumeProgress::from_dto)
        .collect();
    let progress = LibraryService::new(&state.db)
        .update_volume_progress(user.id, id, entries)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(
            progress_dto(progress),
            "Volume progress saved",
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/user/titles/{id}/notifications",
    tag = LIBRARY_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Title ID")),
    responses(
        (status = 200, description = "Notification preference, off when never set", body = ApiResponse<NotificationPreferenceDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Title not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notification_preference(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let email_on_new_volume = LibraryService::new(&state.db)
        .notification_preference(user.id, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(NotificationPreferenceDto {
            email_on_new_volume,
        })),
    ))
}

#[utoipa::path(
    put,
    path = "/api/user/titles/{id}/notifications",
    tag = LIBRARY_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Title ID")),
    request_body = NotificationPreferenceDto,
    responses(
        (status = 200, description = "Notification preference saved", body = ApiResponse<NotificationPreferenceDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Title not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_notification_preference(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<NotificationPreferenceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let email_on_new_volume = LibraryService::new(&state.db)
        .set_notification_preference(user.id, id, payload.email_on_new_volume)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(
            NotificationPreferenceDto {
                email_on_new_volume,
            },
            "Notification preference saved",
        )),
    ))
}

fn progress_dto(progress: Vec<VolumeProgress>) -> Vec<VolumeProgressDto> {
    progress.into_iter().map(|p| p.into_dto()).collect()
}
