use crate::error::{Error, Result};
use crate::models::user::User;
use crate::services::activity_service::ActivityService;
use crate::utils::crypto;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
}

impl AuthService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Verifies credentials and logs the login. Unknown email and wrong
    /// password produce the same error so callers cannot probe for accounts.
    pub async fn authenticate(
        &self,
        activity: &ActivityService,
        email: &str,
        password: &str,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, role, password, created_at, updated_at, deleted_at, is_deleted
            FROM users
            WHERE email = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(invalid_credentials)?;

        if !crypto::verify_password(password, &user.password)? {
            return Err(invalid_credentials());
        }

        activity
            .record_activity(user.id, "login", Some("User logged in"))
            .await?;

        Ok(user)
    }
}

fn invalid_credentials() -> Error {
    Error::Unauthorized("Invalid email or password".to_string())
}
