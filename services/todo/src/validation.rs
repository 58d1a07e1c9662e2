//! Request payload validation
//!
//! Validation stops at presence: a field must exist and be non-blank.
//! There are no format or strength rules.

use crate::error::ApiError;

/// Validate that registration/login credentials are present
pub fn validate_credentials(username: &str, password: &str) -> Result<(), ApiError> {
    if username.trim().is_empty() {
        return Err(ApiError::Validation("Username is required".to_string()));
    }

    if password.is_empty() {
        return Err(ApiError::Validation("Password is required".to_string()));
    }

    Ok(())
}

/// Validate that a todo body carries text
pub fn validate_todo_text(text: &str) -> Result<(), ApiError> {
    if text.trim().is_empty() {
        return Err(ApiError::Validation("Text is required".to_string()));
    }

    Ok(())
}
