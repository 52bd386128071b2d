//! User domain models and parameters.
//!
//! Provides the authenticated user model with its roles, plus parameter types for
//! registration and the paginated administration listing.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::user::{PaginatedUsersDto, Role, UserDto};

/// Application user with the roles granted through `user_role`.
#[derive(Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Lowercased email address, unique across users.
    pub email: String,
    /// bcrypt hash of the user's password.
    pub password_hash: String,
    pub roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("roles", &self.roles)
            .finish_non_exhaustive()
    }
}

impl User {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Converts the user domain model to a DTO for API responses, dropping the password hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            roles: self.roles,
            created_at: self.created_at,
        }
    }

    /// Converts a user entity and its role rows to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The user row
    /// - `roles` - Role rows belonging to the user
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user with roles sorted (`ADMIN` before `USER`)
    /// - `Err(DbErr::Type)` - A role row holds an unknown role name
    pub fn from_entity(
        entity: entity::user::Model,
        roles: Vec<entity::user_role::Model>,
    ) -> Result<Self, DbErr> {
        let mut roles = roles
            .into_iter()
            .map(|r| r.role.parse::<Role>().map_err(DbErr::Type))
            .collect::<Result<Vec<_>, _>>()?;
        roles.sort_by_key(|r| r.as_str());
        roles.dedup();

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            roles,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for inserting a user together with its first role.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Paginated collection of users with metadata.
///
/// Contains a page of users along with pagination metadata for building
/// paginated user management interfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        let users = self.users.into_iter().map(|u| u.into_dto()).collect();

        PaginatedUsersDto {
            users,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for paginated user queries.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of users to return per page.
    pub per_page: u64,
}
