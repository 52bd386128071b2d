//! User service for administration.
//!
//! This module provides the `UserService` for listing users and granting or revoking
//! the `ADMIN` role.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{GetAllUsersParam, PaginatedUsers, User},
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users with pagination.
    ///
    /// Returns a paginated collection of users ordered alphabetically by name.
    /// Calculates total pages based on the per_page parameter and total user count.
    ///
    /// # Arguments
    /// - `param` - Parameters specifying page number and users per page
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        let per_page = param.per_page.clamp(1, 100);
        let (users, total_items) = user_repo.get_all_paginated(param.page, per_page).await?;

        let total_pages = (total_items as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedUsers {
            users,
            total: total_items,
            page: param.page,
            per_page,
            total_pages,
        })
    }

    /// Grants the `ADMIN` role to a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with updated roles
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn add_admin(&self, user_id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(user_id).await?.is_none() {
            return Err(user_not_found());
        }

        user_repo.add_role(user_id, Role::Admin).await?;

        user_repo.find_by_id(user_id).await?.ok_or_else(user_not_found)
    }

    /// Revokes the `ADMIN` role from a user.
    ///
    /// # Arguments
    /// - `acting_user_id` - Admin performing the change
    /// - `user_id` - User losing the role
    ///
    /// # Returns
    /// - `Ok(User)` - The user with updated roles
    /// - `Err(AppError::BadRequest)` - Admin tried to revoke their own role
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn remove_admin(&self, acting_user_id: i32, user_id: i32) -> Result<User, AppError> {
        if acting_user_id == user_id {
            return Err(AppError::BadRequest(
                "You cannot revoke your own admin role".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(user_id).await?.is_none() {
            return Err(user_not_found());
        }

        user_repo.remove_role(user_id, Role::Admin).await?;

        user_repo.find_by_id(user_id).await?.ok_or_else(user_not_found)
    }
}

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}
