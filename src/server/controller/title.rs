use axum::{
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        title::{
            CreateTitleDto, NewVolumeDto, TitleDto, TitleStatus, UpdateTitleDto, UpdateVolumeDto,
            VolumeDto,
        },
    },
    server::{
        error::{upload::UploadError, AppError},
        extract::{Json, Path, Query},
        middleware::auth::{AuthGuard, Permission},
        model::title::TitleFilter,
        service::title::TitleService,
        state::AppState,
    },
};

/// Tag for grouping title and volume endpoints in OpenAPI documentation
pub static TITLE_TAG: &str = "title";

/// Multipart field carrying the cover image.
const COVER_FIELD: &str = "cover";

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct TitleQuery {
    /// Only titles with this publication status
    pub status: Option<TitleStatus>,
    /// Only titles of this publisher
    pub publisher_id: Option<i32>,
    /// Case-insensitive part of the title name
    pub search: Option<String>,
}

impl TitleQuery {
    fn into_filter(self) -> TitleFilter {
        TitleFilter {
            status: self.status,
            publisher_id: self.publisher_id,
            search: self
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// List titles, newest first.
#[utoipa::path(
    get,
    path = "/api/titles",
    tag = TITLE_TAG,
    params(TitleQuery),
    responses(
        (status = 200, description = "Matching titles", body = ApiResponse<Vec<TitleDto>>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_titles(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let titles = service(&state).list(query.into_filter()).await?;

    let titles: Vec<TitleDto> = titles.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(titles))))
}

/// Get a title with its volumes.
#[utoipa::path(
    get,
    path = "/api/titles/{id}",
    tag = TITLE_TAG,
    params(("id" = i32, Path, description = "Title ID")),
    responses(
        (status = 200, description = "Title with volumes", body = ApiResponse<TitleDto>),
        (status = 404, description = "Title not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_title_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let title = service(&state).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(title.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/titles/slug/{slug}",
    tag = TITLE_TAG,
    params(("slug" = String, Path, description = "Title slug")),
    responses(
        (status = 200, description = "Title with volumes", body = ApiResponse<TitleDto>),
        (status = 404, description = "Title not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_title_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let title = service(&state).get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(title.into_dto()))))
}

/// Create a title with its initial volumes.
///
/// # Access Control
/// - `Admin` - Only admins can create titles
///
/// # Returns
/// - `201 Created` - Title created; the slug is derived from the name
/// - `400 Bad Request` - Invalid fields or duplicate volume numbers
/// - `404 Not Found` - Publisher not found
#[utoipa::path(
    post,
    path = "/api/titles",
    tag = TITLE_TAG,
    security(("bearer" = [])),
    request_body = CreateTitleDto,
    responses(
        (status = 201, description = "Title created", body = ApiResponse<TitleDto>),
        (status = 400, description = "Invalid title data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Publisher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_title(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTitleDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let title = service(&state).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(title.into_dto(), "Title created")),
    ))
}

/// Partially update a title.
///
/// A `volumes` list replaces the title's volumes; subscribers are emailed about
/// numbers that did not exist before.
///
/// # Access Control
/// - `Admin` - Only admins can update titles
#[utoipa::path(
    put,
    path = "/api/titles/{id}",
    tag = TITLE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Title ID")),
    request_body = UpdateTitleDto,
    responses(
        (status = 200, description = "Title updated", body = ApiResponse<TitleDto>),
        (status = 400, description = "Invalid title data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Title or publisher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_title(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTitleDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let title = service(&state).update(id, payload).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(title.into_dto()))))
}

/// Delete a title, its volumes and their covers.
///
/// # Access Control
/// - `Admin` - Only admins can delete titles
#[utoipa::path(
    delete,
    path = "/api/titles/{id}",
    tag = TITLE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Title ID")),
    responses(
        (status = 200, description = "Title deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Title not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_title(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    service(&state).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Title deleted"))))
}

/// Upload a title cover as multipart form data (field `cover`).
///
/// # Access Control
/// - `Admin` - Only admins can upload covers
///
/// # Returns
/// - `200 OK` - Cover stored, previous cover removed
/// - `400 Bad Request` - Missing `cover` field or malformed body
/// - `413 Payload Too Large` - Image over 5 MiB
/// - `415 Unsupported Media Type` - Not a JPEG, PNG, GIF or WebP image
#[utoipa::path(
    post,
    path = "/api/titles/{id}/cover",
    tag = TITLE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Title ID")),
    request_body(content_type = "multipart/form-data", description = "Form with a `cover` image file"),
    responses(
        (status = 200, description = "Cover uploaded", body = ApiResponse<TitleDto>),
        (status = 400, description = "Missing or malformed file", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Title not found", body = ErrorDto),
        (status = 413, description = "Image too large", body = ErrorDto),
        (status = 415, description = "Unsupported image type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_title_cover(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let (content_type, bytes) = read_cover(multipart).await?;
    let title = service(&state)
        .set_title_cover(id, content_type.as_deref(), &bytes)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(title.into_dto(), "Cover uploaded")),
    ))
}

/// Volumes of a title ordered by number.
#[utoipa::path(
    get,
    path = "/api/titles/{id}/volumes",
    tag = TITLE_TAG,
    params(("id" = i32, Path, description = "Title ID")),
    responses(
        (status = 200, description = "Volumes", body = ApiResponse<Vec<VolumeDto>>),
        (status = 404, description = "Title not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_volumes(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let volumes = service(&state).volumes(id).await?;

    let volumes: Vec<VolumeDto> = volumes.into_iter().map(|v| v.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(volumes))))
}

/// Add a volume to a title and email its subscribers.
///
/// # Access Control
/// - `Admin` - Only admins can add volumes
#[utoipa::path(
    post,
    path = "/api/titles/{id}/volumes",
    tag = TITLE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Title ID")),
    request_body = NewVolumeDto,
    responses(
        (status = 201, description = "Volume added", body = ApiResponse<VolumeDto>),
        (status = 400, description = "Invalid volume data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Title not found", body = ErrorDto),
        (status = 409, description = "Volume number taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_volume(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<NewVolumeDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let volume = service(&state).add_volume(id, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(volume.into_dto(), "Volume added")),
    ))
}

/// # Access Control
/// - `Admin` - Only admins can update volumes
#[utoipa::path(
    put,
    path = "/api/titles/{id}/volumes/{volume_id}",
    tag = TITLE_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Title ID"),
        ("volume_id" = i32, Path, description = "Volume ID")
    ),
    request_body = UpdateVolumeDto,
    responses(
        (status = 200, description = "Volume updated", body = ApiResponse<VolumeDto>),
        (status = 400, description = "Invalid volume data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Volume not found", body = ErrorDto),
        (status = 409, description = "Volume number taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_volume(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, volume_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateVolumeDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let volume = service(&state).update_volume(id, volume_id, payload).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(volume.into_dto()))))
}

/// # Access Control
/// - `Admin` - Only admins can delete volumes
#[utoipa::path(
    delete,
    path = "/api/titles/{id}/volumes/{volume_id}",
    tag = TITLE_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Title ID"),
        ("volume_id" = i32, Path, description = "Volume ID")
    ),
    responses(
        (status = 200, description = "Volume deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Volume not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_volume(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, volume_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    service(&state).delete_volume(id, volume_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Volume deleted"))))
}

/// Upload a volume cover as multipart form data (field `cover`).
///
/// # Access Control
/// - `Admin` - Only admins can upload covers
#[utoipa::path(
    post,
    path = "/api/titles/{id}/volumes/{volume_id}/cover",
    tag = TITLE_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Title ID"),
        ("volume_id" = i32, Path, description = "Volume ID")
    ),
    request_body(content_type = "multipart/form-data", description = "Form with a `cover` image file"),
    responses(
        (status = 200, description = "Cover uploaded", body = ApiResponse<VolumeDto>),
        (status = 400, description = "Missing or malformed file", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Volume not found", body = ErrorDto),
        (status = 413, description = "Image too large", body = ErrorDto),
        (status = 415, description = "Unsupported image type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_volume_cover(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, volume_id)): Path<(i32, i32)>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let (content_type, bytes) = read_cover(multipart).await?;
    let volume = service(&state)
        .set_volume_cover(id, volume_id, content_type.as_deref(), &bytes)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(volume.into_dto(), "Cover uploaded")),
    ))
}

fn service(state: &AppState) -> TitleService<'_> {
    TitleService::new(&state.db, &state.notifier, &state.covers)
}

async fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    AuthGuard::new(&state.db, &state.jwt, headers)
        .require(&[Permission::Admin])
        .await?;

    Ok(())
}

/// Reads the `cover` field, skipping any other form fields.
async fn read_cover(mut multipart: Multipart) -> Result<(Option<String>, Vec<u8>), AppError> {
    while let Some(field) = multipart.next_field().await.map_err(UploadError::from)? {
        if field.name() != Some(COVER_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(|c| c.to_string());
        let bytes = field.bytes().await.map_err(UploadError::from)?;

        return Ok((content_type, bytes.to_vec()));
    }

    Err(UploadError::MissingField(COVER_FIELD.to_string()).into())
}
