#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod library;

#[cfg(feature = "web")]
pub mod publisher;

#[cfg(feature = "web")]
pub mod title;

#[cfg(feature = "web")]
pub mod user;
