use url::form_urlencoded;

use crate::{
    client::{
        api::helper::{
            delete, get, parse_message_response, parse_response, post, post_file, put,
            send_request, serialize_json,
        },
        model::{cover::CoverFile, error::ApiError},
    },
    model::title::{
        CreateTitleDto, NewVolumeDto, TitleDto, TitleStatus, UpdateTitleDto, UpdateVolumeDto,
        VolumeDto,
    },
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TitleQuery {
    pub status: Option<TitleStatus>,
    pub publisher_id: Option<i32>,
    pub search: Option<String>,
}

impl TitleQuery {
    fn to_url(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(status) = self.status {
            query.append_pair("status", status.as_str());
        }
        if let Some(publisher_id) = self.publisher_id {
            query.append_pair("publisherId", &publisher_id.to_string());
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            query.append_pair("search", search.trim());
        }

        let query = query.finish();
        if query.is_empty() {
            "/api/titles".to_string()
        } else {
            format!("/api/titles?{}", query)
        }
    }
}

pub async fn get_titles(query: TitleQuery) -> Result<Vec<TitleDto>, ApiError> {
    let response = send_request(get(&query.to_url())).await?;
    parse_response(response).await
}

pub async fn get_title(id: i32) -> Result<TitleDto, ApiError> {
    let url = format!("/api/titles/{}", id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_title(payload: CreateTitleDto) -> Result<TitleDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/titles").body(body)).await?;
    parse_response(response).await
}

pub async fn update_title(id: i32, payload: UpdateTitleDto) -> Result<TitleDto, ApiError> {
    let url = format!("/api/titles/{}", id);
    let body = serialize_json(&payload)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_title(id: i32) -> Result<String, ApiError> {
    let url = format!("/api/titles/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_message_response(response).await
}

pub async fn upload_title_cover(id: i32, file: CoverFile) -> Result<TitleDto, ApiError> {
    let url = format!("/api/titles/{}/cover", id);
    let request = post_file(&url, "cover", &file.name, &file.content_type, &file.bytes)?;
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn add_volume(title_id: i32, payload: NewVolumeDto) -> Result<VolumeDto, ApiError> {
    let url = format!("/api/titles/{}/volumes", title_id);
    let body = serialize_json(&payload)?;
    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn update_volume(
    title_id: i32,
    volume_id: i32,
    payload: UpdateVolumeDto,
) -> Result<VolumeDto, ApiError> {
    let url = format!("/api/titles/{}/volumes/{}", title_id, volume_id);
    let body = serialize_json(&payload)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_volume(title_id: i32, volume_id: i32) -> Result<String, ApiError> {
    let url = format!("/api/titles/{}/volumes/{}", title_id, volume_id);
    let response = send_request(delete(&url)).await?;
    parse_message_response(response).await
}

pub async fn upload_volume_cover(
    title_id: i32,
    volume_id: i32,
    file: CoverFile,
) -> Result<VolumeDto, ApiError> {
    let url = format!("/api/titles/{}/volumes/{}/cover", title_id, volume_id);
    let request = post_file(&url, "cover", &file.name, &file.content_type, &file.bytes)?;
    let response = send_request(request).await?;
    parse_response(response).await
}
