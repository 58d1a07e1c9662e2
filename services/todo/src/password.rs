//! Password hashing and verification

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use tracing::error;

use crate::error::ApiError;

/// Hash a password with a fresh per-call salt
///
/// The returned PHC string embeds the salt and cost parameters, so
/// verification needs nothing beyond the hash itself. The cost is the
/// Argon2 default and is not configurable per call.
pub fn hash_password(plain: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!("Failed to hash password: {}", e);
            ApiError::Internal
        })?
        .to_string();

    Ok(hash)
}

/// Verify a candidate password against a stored hash
///
/// A malformed hash counts as a failed verification rather than an error.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed_hash)
        .is_ok()
}
