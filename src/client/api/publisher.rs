use crate::{
    client::{
        api::helper::{
            delete, get, parse_message_response, parse_response, post, put, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::publisher::{CreatePublisherDto, PublisherDto, UpdatePublisherDto},
};

pub async fn get_publishers() -> Result<Vec<PublisherDto>, ApiError> {
    let response = send_request(get("/api/publishers")).await?;
    parse_response(response).await
}

pub async fn create_publisher(payload: CreatePublisherDto) -> Result<PublisherDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/publishers").body(body)).await?;
    parse_response(response).await
}

pub async fn update_publisher(
    id: i32,
    payload: UpdatePublisherDto,
) -> Result<PublisherDto, ApiError> {
    let url = format!("/api/publishers/{}", id);
    let body = serialize_json(&payload)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_publisher(id: i32) -> Result<String, ApiError> {
    let url = format!("/api/publishers/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_message_response(response).await
}
