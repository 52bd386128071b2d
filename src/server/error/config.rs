use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Required environment variables are not set.
    ///
    /// Lists every missing variable. Check the `.env` file for the required configuration.
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingEnvVars(Vec<String>),

    /// An environment variable is set but cannot be interpreted.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar { name: String, reason: String },

    /// The JWT signing secret is shorter than the accepted minimum.
    #[error("JWT_SECRET must be at least {0} characters long")]
    JwtSecretTooShort(usize),
}
