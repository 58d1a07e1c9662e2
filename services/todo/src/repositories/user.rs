//! User repository for database operations

use sqlx::PgPool;
use tracing::info;

use crate::error::ApiError;
use crate::models::User;
use crate::password;

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new user with a freshly hashed password
    ///
    /// Uniqueness is enforced by the unique index on `users.username`, not
    /// by a read-then-write check, so concurrent registrations of the same
    /// name resolve to exactly one success.
    pub async fn create(&self, username: &str, password: &str) -> Result<User, ApiError> {
        info!("Creating new user: {}", username);

        let password_hash = password::hash_password(password)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash, created_at, updated_at
            "#,
        )
        .bind(username)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                ApiError::DuplicateUsername
            } else {
                ApiError::Database(e)
            }
        })?;

        Ok(user)
    }

    /// Find a user by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Verify a candidate password against the stored hash
    pub fn verify_password(&self, user: &User, password: &str) -> bool {
        password::verify_password(password, &user.password_hash)
    }
}
