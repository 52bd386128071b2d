use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// bcrypt failed to hash or verify a password.
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Signing a JWT failed.
    #[error("Failed to sign access token: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),

    /// A blocking task panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),
}
