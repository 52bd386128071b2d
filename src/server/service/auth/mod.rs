//! Registration, login and profile lookups.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        auth::{LoginDto, RegisterDto},
        user::Role,
    },
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, is_unique_violation, AppError},
        model::user::{CreateUserParam, User},
        service::auth::{
            password::{hash_password, verify_password},
            token::JwtKeys,
        },
        util::validation::Validator,
    },
};

/// Issued token with the user it was issued for.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    pub user: User,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    keys: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a JwtKeys) -> Self {
        Self { db, keys }
    }

    /// Registers a new account with the `USER` role.
    ///
    /// # Arguments
    /// - `dto` - Name (2-100 chars), email and password (at least 6 chars)
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Created user and its access token
    /// - `Err(AppError::Validation)` - One or more fields are invalid
    /// - `Err(AuthError::EmailTaken)` - Email already registered
    pub async fn register(&self, dto: RegisterDto) -> Result<AuthSession, AppError> {
        let email = normalize_email(&dto.email);
        let name = dto.name.trim().to_string();

        Validator::new()
            .length("name", &name, 2, 100)
            .email("email", &email)
            .check(
                dto.password.chars().count() >= 6,
                "password must be at least 6 characters",
            )
            .finish()?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.email_exists(&email).await? {
            return Err(AuthError::EmailTaken(email).into());
        }

        let password_hash = hash_password(dto.password).await?;
        let user = user_repo
            .create(CreateUserParam {
                name,
                email: email.clone(),
                password_hash,
                role: Role::User,
            })
            .await
            .map_err(|err| -> AppError {
                if is_unique_violation(&err) {
                    AuthError::EmailTaken(email).into()
                } else {
                    err.into()
                }
            })?;

        self.session_for(user)
    }

    /// Authenticates by email and password.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Credentials valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, dto: LoginDto) -> Result<AuthSession, AppError> {
        let email = normalize_email(&dto.email);

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(dto.password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.session_for(user)
    }

    /// Loads the profile of an authenticated user.
    pub async fn profile(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(user_id).into())
    }

    fn session_for(&self, user: User) -> Result<AuthSession, AppError> {
        let access_token = self.keys.issue(&user)?;

        Ok(AuthSession { access_token, user })
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
