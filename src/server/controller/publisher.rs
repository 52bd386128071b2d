use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        publisher::{CreatePublisherDto, PublisherDto, UpdatePublisherDto},
    },
    server::{
        error::AppError,
        extract::{Json, Path},
        middleware::auth::{AuthGuard, Permission},
        service::publisher::PublisherService,
        state::AppState,
    },
};

/// Tag for grouping publisher endpoints in OpenAPI documentation
pub static PUBLISHER_TAG: &str = "publisher";

/// List all publishers ordered by name.
#[utoipa::path(
    get,
    path = "/api/publishers",
    tag = PUBLISHER_TAG,
    responses(
        (status = 200, description = "All publishers", body = ApiResponse<Vec<PublisherDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_publishers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let publishers = PublisherService::new(&state.db).get_all().await?;

    let publishers: Vec<PublisherDto> = publishers.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(publishers))))
}

#[utoipa::path(
    get,
    path = "/api/publishers/{id}",
    tag = PUBLISHER_TAG,
    params(("id" = i32, Path, description = "Publisher ID")),
    responses(
        (status = 200, description = "Publisher", body = ApiResponse<PublisherDto>),
        (status = 404, description = "Publisher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_publisher_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let publisher = PublisherService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(publisher.into_dto()))))
}

/// Create a publisher.
///
/// # Access Control
/// - `Admin` - Only admins can create publishers
///
/// # Returns
/// - `201 Created` - Publisher created
/// - `400 Bad Request` - Invalid name or country
/// - `409 Conflict` - A publisher with that name exists
#[utoipa::path(
    post,
    path = "/api/publishers",
    tag = PUBLISHER_TAG,
    security(("bearer" = [])),
    request_body = CreatePublisherDto,
    responses(
        (status = 201, description = "Publisher created", body = ApiResponse<PublisherDto>),
        (status = 400, description = "Invalid publisher data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Publisher name taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_publisher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePublisherDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let publisher = PublisherService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            publisher.into_dto(),
            "Publisher created",
        )),
    ))
}

/// Update a publisher's name or country.
///
/// # Access Control
/// - `Admin` - Only admins can update publishers
#[utoipa::path(
    put,
    path = "/api/publishers/{id}",
    tag = PUBLISHER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Publisher ID")),
    request_body = UpdatePublisherDto,
    responses(
        (status = 200, description = "Publisher updated", body = ApiResponse<PublisherDto>),
        (status = 400, description = "Invalid publisher data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Publisher not found", body = ErrorDto),
        (status = 409, description = "Publisher name taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_publisher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePublisherDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let publisher = PublisherService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(publisher.into_dto()))))
}

/// Delete a publisher without titles.
///
/// # Access Control
/// - `Admin` - Only admins can delete publishers
///
/// # Returns
/// - `200 OK` - Publisher deleted
/// - `404 Not Found` - Publisher not found
/// - `409 Conflict` - Publisher still has titles
#[utoipa::path(
    delete,
    path = "/api/publishers/{id}",
    tag = PUBLISHER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Publisher ID")),
    responses(
        (status = 200, description = "Publisher deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Publisher not found", body = ErrorDto),
        (status = 409, description = "Publisher has titles", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_publisher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    PublisherService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Publisher deleted"))))
}
