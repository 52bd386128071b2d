//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records and their roles.
//! Role rows are always loaded alongside users so the domain `User` carries its roles.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::user::Role,
    server::model::user::{CreateUserParam, User},
};

/// Repository providing database operations for users and roles.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user together with its initial role.
    ///
    /// # Arguments
    /// - `param` - Name, normalized email, password hash and initial role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its role
    /// - `Err(DbErr)` - Database error, including unique violation on email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let role = entity::user_role::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(user, vec![role])
    }

    /// Finds a user by ID with roles.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        self.with_roles(entity).await.map(Some)
    }

    /// Finds a user by email. The email is expected to be normalized (trimmed, lowercase).
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        self.with_roles(entity).await.map(Some)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Grants a role to a user. Granting a role the user already has is a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - Role present after the call
    /// - `Err(DbErr)` - Database error, including foreign key violation for unknown users
    pub async fn add_role(&self, user_id: i32, role: Role) -> Result<(), DbErr> {
        let existing = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .filter(entity::user_role::Column::Role.eq(role.as_str()))
            .count(self.db)
            .await?;

        if existing == 0 {
            entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                role: ActiveValue::Set(role.as_str().to_string()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Removes a role from a user. Removing a role the user lacks is a no-op.
    pub async fn remove_role(&self, user_id: i32, role: Role) -> Result<(), DbErr> {
        entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .filter(entity::user_role::Column::Role.eq(role.as_str()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks if any user holds the `ADMIN` role.
    ///
    /// Used at startup to decide whether the bootstrap admin must be created.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin exists
    /// - `Ok(false)` - No admin exists (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets all users with pagination, ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and the total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let ids: Vec<i32> = entities.iter().map(|u| u.id).collect();
        let mut roles_by_user: HashMap<i32, Vec<entity::user_role::Model>> = HashMap::new();
        for role in entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.is_in(ids))
            .all(self.db)
            .await?
        {
            roles_by_user.entry(role.user_id).or_default().push(role);
        }

        let users = entities
            .into_iter()
            .map(|u| {
                let roles = roles_by_user.remove(&u.id).unwrap_or_default();
                User::from_entity(u, roles)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    async fn with_roles(&self, entity: entity::user::Model) -> Result<User, DbErr> {
        let roles = entity
            .find_related(entity::prelude::UserRole)
            .all(self.db)
            .await?;

        User::from_entity(entity, roles)
    }
}
