//! Kushon REST backend.
//!
//! Everything under `/api` is served from here: JWT authentication, the publisher and
//! title catalog, per-user volume ownership and the new volume email notifications.
//! Uploaded covers are written to disk and served back from `/uploads`.
//!
//! Layers, outermost first:
//!
//! - `router` mounts every route, Swagger UI, CORS and request tracing
//! - `controller` handlers check access through `middleware::auth::AuthGuard`, map DTOs
//!   to params and wrap results in the `{ success, data, message }` envelope
//! - `service` holds the rules (validation, slugs, volume sync, notifications, covers)
//! - `data` repositories talk to SeaORM and return `model` types
//! - `error` turns every failure into a status code and an error envelope; `extract`
//!   wraps axum's extractors so malformed input goes through it too
//!
//! `config`, `startup` and `state` wire the pieces together when the process starts;
//! `util` has the slug and validation helpers shared by services.
//!
//! Only compiled with the `server` feature.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
