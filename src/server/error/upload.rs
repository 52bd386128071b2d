use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum UploadError {
    /// Malformed multipart body.
    #[error("Invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),

    /// Expected form field was absent.
    #[error("Missing form field '{0}'")]
    MissingField(String),

    /// File is not one of the accepted image types.
    #[error("Unsupported image type '{0}', expected JPEG, PNG, GIF or WebP")]
    UnsupportedType(String),

    /// File exceeds the size limit.
    #[error("Image is {size} bytes, the limit is {max} bytes")]
    TooLarge { size: usize, max: usize },

    /// Writing or removing the file on disk failed.
    #[error("Failed to store upload: {0}")]
    Io(#[from] std::io::Error),
}

/// Converts upload errors into HTTP responses.
///
/// - `Multipart` → the status axum reports for it (413 when the body limit is hit, else 400)
/// - `MissingField` → 400 Bad Request
/// - `UnsupportedType` → 415 Unsupported Media Type
/// - `TooLarge` → 413 Payload Too Large
/// - `Io` → 500 Internal Server Error
impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Multipart(err) => err.status(),
            Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Io(err) => {
                tracing::error!("Upload storage error: {}", err);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error")),
                )
                    .into_response();
            }
        };

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
