//! Authentication middleware for bearer token validation

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::warn;
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

/// Identity of the authenticated caller, inserted into request extensions
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
}

/// Extract and verify the bearer token from the Authorization header
///
/// A missing token is unauthenticated (401); a token that is present but
/// fails verification is forbidden (403). That asymmetry is part of the
/// service contract, not an implementation detail.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    // Extract the Authorization header
    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(ApiError::MissingToken)?;

    // A header without a bearer token still counts as "no token present"
    let token = auth_header
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or(ApiError::MissingToken)?;

    let claims = state.jwt_service.verify_token(token).map_err(|e| {
        warn!("Token verification failed: {}", e);
        ApiError::InvalidToken
    })?;

    // Make the caller identity available to handlers
    req.extensions_mut().insert(AuthUser {
        id: claims.sub,
        username: claims.username,
    });

    Ok(next.run(req).await)
}
