//! Requests sent through the full router: extractors, guards, body limits and the
//! error envelope together.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    router::router,
    service::test::{dispatcher, jwt_keys, temp_covers, RecordingMailer, PNG},
    state::AppState,
};


struct TestApp {
    app: Router,
    db: DatabaseConnection,
    _context: TestContext,
    _uploads: TempDir,
}

impl TestApp {
    async fn new() -> Self {
        let context = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = context.db.clone().unwrap();
        let (uploads, covers) = temp_covers();

        let upload_dir = uploads.path().to_string_lossy().to_string();
        let config = Config::from_lookup(|key| {
            let value = match key {
                "DATABASE_URL" => "sqlite::memory:",
                "JWT_SECRET" => crate::server::service::test::JWT_SECRET,
                "SMTP_HOST" => "localhost",
                "SMTP_PORT" => "1025",
                "SMTP_FROM" => "Kushon <noreply@kushon.test>",
                "FRONTEND_URL" => "http://localhost:5173",
                "UPLOAD_DIR" => upload_dir.as_str(),
                _ => return None,
            };
            Some(value.to_string())
        })
        .unwrap();

        let mailer = RecordingMailer::default();
        let state = AppState::new(db.clone(), jwt_keys(), dispatcher(&db, &mailer), covers);

        Self {
            app: router(&config).with_state(state),
            db,
            _context: context,
            _uploads: uploads,
        }
    }

    async fn admin_token(&self) -> String {
        let admin = factory::create_admin(&self.db).await.unwrap();
        let admin = UserRepository::new(&self.db)
            .find_by_id(admin.id)
            .await
            .unwrap()
            .unwrap();

        jwt_keys().issue(&admin).unwrap()
    }

    /// Sends the request and decodes the body as JSON (`Null` when it is not JSON).
    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }
}

fn json_request(method: Method, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

const BOUNDARY: &str = "kushon-test-boundary";

/// Multipart request with a single `cover` file field.
fn cover_request(uri: &str, token: Option<&str>, content_type: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"cover\"; filename=\"cover.bin\"\r\n\
         Content-Type: {content_type}\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let mut request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    request.body(Body::from(body)).unwrap()
}

fn assert_error_envelope(body: &Value) {
    assert_eq!(body["success"], Value::Bool(false), "body: {body}");
    assert!(body["message"].is_string(), "body: {body}");
}
