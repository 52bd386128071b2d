//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! aggregate in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod notification_preference;
pub mod publisher;
pub mod title;
pub mod user;
pub mod user_volume;
pub mod volume;

#[cfg(test)]
mod test;
