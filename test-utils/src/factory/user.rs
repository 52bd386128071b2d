//! User factory for creating test user entities with their roles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password every factory-created user gets unless overridden.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .email("reader@example.com")
///     .password("secret-pass")
///     .admin()
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password: String,
    roles: Vec<&'static str>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {id}"`
    /// - email: `"user{id}@example.com"`
    /// - password: [`DEFAULT_PASSWORD`]
    /// - roles: `USER`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            password: DEFAULT_PASSWORD.to_string(),
            roles: vec!["USER"],
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the plaintext password; it is bcrypt-hashed on `build()`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Gives the user the `ADMIN` role in addition to `USER`.
    pub fn admin(mut self) -> Self {
        if !self.roles.contains(&"ADMIN") {
            self.roles.push("ADMIN");
        }
        self
    }

    /// Builds and inserts the user and its role rows.
    ///
    /// Passwords are hashed with the minimum bcrypt cost to keep tests fast.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert or hashing failure
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let password_hash = bcrypt::hash(&self.password, 4)
            .map_err(|e| DbErr::Custom(format!("Failed to hash test password: {}", e)))?;

        let now = Utc::now();
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for role in self.roles {
            entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user.id),
                role: ActiveValue::Set(role.to_string()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(user)
    }
}

/// Creates a regular user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user holding both `USER` and `ADMIN` roles.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin().build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

    #[tokio::test]
    async fn creates_user_with_user_role() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        let roles = UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user.id))
            .all(db)
            .await?;
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].role, "USER");
        assert!(bcrypt::verify(DEFAULT_PASSWORD, &user.password_hash).unwrap());

        Ok(())
    }

    #[tokio::test]
    async fn creates_admin_with_both_roles() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let admin = create_admin(db).await?;

        let roles = UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(admin.id))
            .all(db)
            .await?;
        let names: Vec<_> = roles.iter().map(|r| r.role.as_str()).collect();
        assert!(names.contains(&"USER"));
        assert!(names.contains(&"ADMIN"));

        Ok(())
    }
}
