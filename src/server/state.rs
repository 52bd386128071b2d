//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - JWT signing keys for issuing and verifying access tokens
//! - Notification dispatcher running new volume emails in the background
//! - Cover storage for uploaded images

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::{
    auth::token::JwtKeys, cover::CoverStorage, notification::NotificationDispatcher,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<JwtKeys>` is a reference-counted pointer
/// - `NotificationDispatcher` holds a pool clone and an `Arc` mailer
/// - `CoverStorage` only holds the upload path
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Keys used by the auth controller and the auth guard.
    pub jwt: Arc<JwtKeys>,

    /// Spawns email jobs when volumes are added.
    pub notifier: NotificationDispatcher,

    /// Writes and removes cover files under the upload directory.
    pub covers: CoverStorage,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Access token keys
    /// - `notifier` - Background notification dispatcher
    /// - `covers` - Cover image storage
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        jwt: JwtKeys,
        notifier: NotificationDispatcher,
        covers: CoverStorage,
    ) -> Self {
        Self {
            db,
            jwt: Arc::new(jwt),
            notifier,
            covers,
        }
    }
}
