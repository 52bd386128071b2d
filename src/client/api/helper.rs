use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::{
    client::model::{auth::stored_token, error::ApiError},
    model::api::{ApiResponse, ErrorDto, MessageDto},
};

/// Unwraps the `{ success, data, message }` envelope of a successful response.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if !(200..300).contains(&status) {
        return Err(parse_error(status, response).await);
    }

    let envelope = response
        .json::<ApiResponse<T>>()
        .await
        .map_err(|e| ApiError::new(500, format!("Failed to parse response: {}", e)))?;

    match envelope.data {
        Some(data) if envelope.success => Ok(data),
        _ => Err(ApiError::new(
            status,
            envelope
                .message
                .unwrap_or_else(|| "Response carried no data".to_string()),
        )),
    }
}

/// Parses a success response that only carries a message.
pub async fn parse_message_response(response: Response) -> Result<String, ApiError> {
    let status = response.status() as u64;

    if !(200..300).contains(&status) {
        return Err(parse_error(status, response).await);
    }

    response
        .json::<MessageDto>()
        .await
        .map(|dto| dto.message)
        .map_err(|e| ApiError::new(500, format!("Failed to parse response: {}", e)))
}

async fn parse_error(status: u64, response: Response) -> ApiError {
    let message = match response.json::<ErrorDto>().await {
        Ok(dto) if dto.errors.is_empty() => dto.message,
        Ok(dto) => dto.errors.join("; "),
        Err(_) => format!("Request failed with status {}", status),
    };

    ApiError { status, message }
}

fn with_token(request: Request) -> Request {
    match stored_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

/// Create a GET request carrying the stored access token
pub fn get(url: &str) -> Request {
    with_token(Request::get(url))
}

/// Create a POST request with the access token and JSON content type
pub fn post(url: &str) -> Request {
    with_token(Request::post(url)).header("Content-Type", "application/json")
}

/// Create a PUT request with the access token and JSON content type
pub fn put(url: &str) -> Request {
    with_token(Request::put(url)).header("Content-Type", "application/json")
}

/// Create a DELETE request carrying the access token
pub fn delete(url: &str) -> Request {
    with_token(Request::delete(url))
}

/// Create a multipart POST with a single file field.
///
/// The browser sets the multipart boundary, so no content type header is added.
pub fn post_file(
    url: &str,
    field: &str,
    file_name: &str,
    content_type: &str,
    bytes: &[u8],
) -> Result<Request, ApiError> {
    let to_error = |_| ApiError::new(500, "Failed to prepare file upload");

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(to_error)?;

    let form = web_sys::FormData::new().map_err(to_error)?;
    form.append_with_blob_and_filename(field, &blob, file_name)
        .map_err(to_error)?;

    Ok(with_token(Request::post(url)).body(form))
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::new(500, format!("Failed to send request: {}", e)))
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::new(500, format!("Failed to serialize request: {}", e)))
}
