//! Data transfer objects shared by the server and the web client.
//!
//! Every request and response body crossing the HTTP boundary is defined here so both
//! sides serialize the same camelCase JSON.

pub mod api;
pub mod auth;
pub mod library;
pub mod publisher;
pub mod title;
pub mod user;
