use crate::dto::user_dto::{CreateUserPayload, UpdateUserPayload};
use crate::error::Result;
use crate::models::user::User;
use crate::utils::crypto;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every non-deleted user, newest first. The dashboard paginates client-side.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, role, password, created_at, updated_at, deleted_at, is_deleted
            FROM users
            WHERE is_deleted = FALSE
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    /// Creates a user with the configured default password. Duplicate emails
    /// surface as a plain database error; the API does not single them out.
    pub async fn create_user(&self, payload: CreateUserPayload) -> Result<User> {
        let hashed = crypto::hash_password(&crate::config::get_config().default_user_password)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, role, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, role, password, created_at, updated_at, deleted_at, is_deleted
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.role)
        .bind(&hashed)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn update_user(&self, id: Uuid, payload: UpdateUserPayload) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $1, email = $2, role = $3, updated_at = NOW()
            WHERE id = $4 AND is_deleted = FALSE
            RETURNING id, name, email, role, password, created_at, updated_at, deleted_at, is_deleted
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.role)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Marks the row deleted without touching its activity history. A second
    /// call finds no live row and reports not-found.
    pub async fn soft_delete_user(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET is_deleted = TRUE, deleted_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            RETURNING id, name, email, role, password, created_at, updated_at, deleted_at, is_deleted
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn find_active(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, role, password, created_at, updated_at, deleted_at, is_deleted
            FROM users
            WHERE id = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
