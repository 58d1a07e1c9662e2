//! To-do service routes

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    middleware::{AuthUser, auth_middleware},
    models::TodoPatch,
    state::AppState,
    validation::{validate_credentials, validate_todo_text},
};

/// Request for user registration
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Request for user login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response for a successful login
#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Request for creating a todo item
#[derive(Deserialize)]
pub struct CreateTodoRequest {
    pub text: String,
}

/// Create the router for the to-do service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/todos", post(create_todo).get(list_todos))
        .route("/todos/:id", put(update_todo).delete(delete_todo))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database_ok = common::database::health_check(&state.db_pool)
        .await
        .unwrap_or(false);
    let status = if database_ok { "ok" } else { "degraded" };

    Json(json!({
        "status": status,
        "service": "todo-service"
    }))
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    validate_credentials(&payload.username, &payload.password)?;

    let user = state
        .user_repository
        .create(&payload.username, &payload.password)
        .await?;

    info!("User registered: {}", user.username);

    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "User registered successfully"})),
    ))
}

/// Log a user in and issue a session token
///
/// An unknown username and a wrong password produce the same response, so
/// callers cannot enumerate accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    validate_credentials(&payload.username, &payload.password)?;

    let user = state
        .user_repository
        .find_by_username(&payload.username)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !state.user_repository.verify_password(&user, &payload.password) {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.jwt_service.issue_token(&user)?;

    info!("User logged in: {}", user.username);

    Ok(Json(TokenResponse { token }))
}

/// Create a todo item owned by the caller
pub async fn create_todo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateTodoRequest>,
) -> ApiResult<impl IntoResponse> {
    validate_todo_text(&payload.text)?;

    let todo = state.todo_repository.create(user.id, &payload.text).await?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// List the caller's todo items
pub async fn list_todos(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let todos = state.todo_repository.list_by_owner(user.id).await?;

    Ok(Json(todos))
}

/// Update a todo item owned by the caller
pub async fn update_todo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(patch): Json<TodoPatch>,
) -> ApiResult<impl IntoResponse> {
    if let Some(text) = &patch.text {
        validate_todo_text(text)?;
    }

    let todo = state
        .todo_repository
        .update_by_owner(user.id, id, &patch)
        .await?
        .ok_or(ApiError::TodoNotFound)?;

    Ok(Json(todo))
}

/// Delete a todo item owned by the caller
pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let deleted = state.todo_repository.delete_by_owner(user.id, id).await?;

    if deleted {
        Ok(Json(json!({"message": "Todo deleted successfully"})))
    } else {
        Err(ApiError::TodoNotFound)
    }
}
