//! bcrypt password hashing on the blocking thread pool.

use crate::server::error::AppError;

pub const BCRYPT_COST: u32 = 10;

pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST)).await??;

    Ok(hash)
}

/// Returns `Ok(false)` for a wrong password or an unparseable stored hash.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await?;

    Ok(matches.unwrap_or(false))
}
