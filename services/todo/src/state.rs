//! Application state shared across handlers

use sqlx::PgPool;

use crate::jwt::JwtService;
use crate::repositories::{TodoRepository, UserRepository};

/// Application state shared across handlers
///
/// Built once at startup and handed to the router; there is no
/// process-wide singleton for the store handle or the signing secret.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub user_repository: UserRepository,
    pub todo_repository: TodoRepository,
    pub jwt_service: JwtService,
}
