pub mod auth;
pub mod cover;
pub mod error;
pub mod toast;
