//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! String-backed columns such as title status and user roles are parsed into enums here,
//! so the service layer never handles raw database strings.

pub mod library;
pub mod publisher;
pub mod title;
pub mod user;
pub mod volume;
