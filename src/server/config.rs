use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;
/// One year.
const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";
const MIN_JWT_SECRET_LEN: usize = 32;

/// Environment variables that must be present for the server to start.
const REQUIRED_VARS: [&str; 6] = [
    "DATABASE_URL",
    "JWT_SECRET",
    "SMTP_HOST",
    "SMTP_PORT",
    "SMTP_FROM",
    "FRONTEND_URL",
];

#[derive(Debug, Clone, PartialEq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub from: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Connect with implicit TLS instead of plain SMTP.
    pub secure: bool,
}

/// Credentials for the admin account created on first start.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,

    pub smtp: SmtpConfig,

    pub frontend_url: Url,
    pub upload_dir: String,
    pub cors_origins: Vec<String>,

    pub bootstrap_admin: Option<BootstrapAdmin>,

    /// Insert demo catalog data and a demo reader into an empty database.
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|key| std::env::var(key).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Every missing required variable is reported in a single error so a misconfigured
    /// deployment can be fixed in one pass.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .filter(|key| get(**key).is_none())
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingEnvVars(missing));
        }

        let required =
            |key: &str| get(key).ok_or_else(|| ConfigError::MissingEnvVars(vec![key.to_string()]));

        let jwt_secret = required("JWT_SECRET")?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::JwtSecretTooShort(MIN_JWT_SECRET_LEN));
        }

        let jwt_expiration_hours = match get("JWT_EXPIRATION_HOURS") {
            Some(value) => parse_var("JWT_EXPIRATION_HOURS", &value)?,
            None => DEFAULT_JWT_EXPIRATION_HOURS,
        };
        if !(1..=MAX_JWT_EXPIRATION_HOURS).contains(&jwt_expiration_hours) {
            return Err(ConfigError::InvalidEnvVar {
                name: "JWT_EXPIRATION_HOURS".to_string(),
                reason: format!("must be between 1 and {} hours", MAX_JWT_EXPIRATION_HOURS),
            });
        }

        let smtp = SmtpConfig {
            host: required("SMTP_HOST")?,
            port: parse_var("SMTP_PORT", &required("SMTP_PORT")?)?,
            from: required("SMTP_FROM")?,
            username: get("SMTP_USER"),
            password: get("SMTP_PASSWORD"),
            secure: match get("SMTP_SECURE") {
                Some(value) => parse_var("SMTP_SECURE", &value)?,
                None => false,
            },
        };

        let frontend_url =
            Url::parse(&required("FRONTEND_URL")?).map_err(|e| ConfigError::InvalidEnvVar {
                name: "FRONTEND_URL".to_string(),
                reason: e.to_string(),
            })?;

        let cors_origins = get("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let bootstrap_admin = match (get("ADMIN_EMAIL"), get("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(BootstrapAdmin {
                name: get("ADMIN_NAME").unwrap_or_else(|| "Admin".to_string()),
                email,
                password,
            }),
            _ => None,
        };

        let seed_demo = match get("SEED_DEMO") {
            Some(value) => parse_var("SEED_DEMO", &value)?,
            None => false,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret,
            jwt_expiration_hours,
            smtp,
            frontend_url,
            upload_dir: get("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            cors_origins,
            bootstrap_admin,
            seed_demo,
        })
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        })
}
