use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use dioxus_logger::tracing;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        config::Config,
        controller::{auth, library, publisher, title, user},
        service::cover::MAX_COVER_BYTES,
        state::AppState,
    },
};

/// Room for multipart framing around the largest accepted cover.
const COVER_BODY_LIMIT: usize = MAX_COVER_BYTES + 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "Kushon API", description = "Manga library tracker"),
    paths(
        auth::register,
        auth::login,
        auth::me,
        publisher::get_publishers,
        publisher::get_publisher_by_id,
        publisher::create_publisher,
        publisher::update_publisher,
        publisher::delete_publisher,
        title::get_titles,
        title::get_title_by_id,
        title::get_title_by_slug,
        title::create_title,
        title::update_title,
        title::delete_title,
        title::upload_title_cover,
        title::get_volumes,
        title::add_volume,
        title::update_volume,
        title::delete_volume,
        title::upload_volume_cover,
        library::get_my_titles,
        library::get_volume_progress,
        library::update_volume_progress,
        library::get_notification_preference,
        library::set_notification_preference,
        user::get_users,
        user::add_admin,
        user::remove_admin,
    ),
    components(schemas(ErrorDto, MessageDto)),
    tags(
        (name = "auth", description = "Registration, login and current user"),
        (name = "publisher", description = "Publisher management"),
        (name = "title", description = "Titles, volumes and covers"),
        (name = "library", description = "Current user's volume ownership and notifications"),
        (name = "user", description = "User administration"),
    ),
    modifiers(&BearerAuth),
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router(config: &Config) -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/publishers",
            get(publisher::get_publishers).post(publisher::create_publisher),
        )
        .route(
            "/api/publishers/{id}",
            get(publisher::get_publisher_by_id)
                .put(publisher::update_publisher)
                .delete(publisher::delete_publisher),
        )
        .route(
            "/api/titles",
            get(title::get_titles).post(title::create_title),
        )
        .route("/api/titles/slug/{slug}", get(title::get_title_by_slug))
        .route(
            "/api/titles/{id}",
            get(title::get_title_by_id)
                .put(title::update_title)
                .delete(title::delete_title),
        )
        .route(
            "/api/titles/{id}/cover",
            post(title::upload_title_cover).layer(DefaultBodyLimit::max(COVER_BODY_LIMIT)),
        )
        .route(
            "/api/titles/{id}/volumes",
            get(title::get_volumes).post(title::add_volume),
        )
        .route(
            "/api/titles/{id}/volumes/{volume_id}",
            put(title::update_volume).delete(title::delete_volume),
        )
        .route(
            "/api/titles/{id}/volumes/{volume_id}/cover",
            post(title::upload_volume_cover).layer(DefaultBodyLimit::max(COVER_BODY_LIMIT)),
        )
        .route("/api/user/titles", get(library::get_my_titles))
        .route(
            "/api/user/titles/{id}/volumes",
            get(library::get_volume_progress).put(library::update_volume_progress),
        )
        .route(
            "/api/user/titles/{id}/notifications",
            get(library::get_notification_preference).put(library::set_notification_preference),
        )
        .route("/api/users", get(user::get_users))
        .route(
            "/api/users/{id}/admin",
            post(user::add_admin).delete(user::remove_admin),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let mut allowed = Vec::with_capacity(origins.len());
    for origin in origins {
        match HeaderValue::from_str(origin) {
            Ok(value) => allowed.push(value),
            Err(_) => tracing::error!("Ignoring invalid CORS origin '{}'", origin),
        }
    }

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}
