//! Todo repository with ownership-scoped queries

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Todo, TodoPatch};

/// Todo repository
///
/// Every read and mutation filters on both item id and owner id inside a
/// single statement, so one user's requests can never observe or touch
/// another user's items, and "absent" is indistinguishable from "owned by
/// someone else".
#[derive(Clone)]
pub struct TodoRepository {
    pool: PgPool,
}

impl TodoRepository {
    /// Create a new todo repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a todo item owned by the given user
    pub async fn create(&self, owner_id: Uuid, text: &str) -> Result<Todo, ApiError> {
        info!("Creating todo for user: {}", owner_id);

        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (text, user_id)
            VALUES ($1, $2)
            RETURNING id, text, completed, user_id, created_at, updated_at
            "#,
        )
        .bind(text)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(todo)
    }

    /// List all todo items owned by the given user, oldest first
    pub async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Todo>, ApiError> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, text, completed, user_id, created_at, updated_at
            FROM todos
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(todos)
    }

    /// Apply a partial update to a todo owned by the given user
    ///
    /// The owner filter is part of the UPDATE itself, making the
    /// lookup-and-mutate atomic. `None` covers a missing id and a foreign
    /// owner alike.
    pub async fn update_by_owner(
        &self,
        owner_id: Uuid,
        todo_id: Uuid,
        patch: &TodoPatch,
    ) -> Result<Option<Todo>, ApiError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET text = COALESCE($3, text),
                completed = COALESCE($4, completed),
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING id, text, completed, user_id, created_at, updated_at
            "#,
        )
        .bind(todo_id)
        .bind(owner_id)
        .bind(patch.text.as_deref())
        .bind(patch.completed)
        .fetch_optional(&self.pool)
        .await?;

        Ok(todo)
    }

    /// Delete a todo owned by the given user
    ///
    /// Returns false when no row matched, whether the id is unknown or the
    /// item belongs to another user.
    pub async fn delete_by_owner(&self, owner_id: Uuid, todo_id: Uuid) -> Result<bool, ApiError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(todo_id)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
