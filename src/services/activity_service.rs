use crate::dto::activity_dto::ActivityResponse;
use crate::error::{Error, Result};
use crate::models::activity::{ActivityEntry, ActivitySummaryEntry};
use crate::models::user::UserProfile;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ActivityService {
    pool: PgPool,
}

impl ActivityService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Appends one activity record and bumps the per-(user, type) counter.
    /// Both writes happen in one transaction; concurrent increments are left
    /// to the database's conflict resolution on the (user_id, activity_type)
    /// unique key.
    pub async fn record_activity(
        &self,
        user_id: Uuid,
        activity_type: &str,
        details: Option<&str>,
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let exists = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM users WHERE id = $1 AND is_deleted = FALSE",
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;
        if exists.is_none() {
            return Err(Error::NotFound("User not found".to_string()));
        }

        sqlx::query(
            r#"
            INSERT INTO user_activity (user_id, activity_type, details)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user_id)
        .bind(activity_type)
        .bind(details)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO user_activity_summary (user_id, activity_type, activity_count, last_updated)
            VALUES ($1, $2, 1, NOW())
            ON CONFLICT (user_id, activity_type)
            DO UPDATE SET
                activity_count = user_activity_summary.activity_count + 1,
                last_updated = NOW()
            "#,
        )
        .bind(user_id)
        .bind(activity_type)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Ten newest log rows within the last month.
    pub async fn recent_activities(&self, user_id: Uuid) -> Result<Vec<ActivityEntry>> {
        let entries = sqlx::query_as::<_, ActivityEntry>(
            r#"
            SELECT activity_type, activity_timestamp, details
            FROM user_activity
            WHERE user_id = $1
              AND activity_timestamp >= NOW() - INTERVAL '1 month'
            ORDER BY activity_timestamp DESC
            LIMIT 10
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    /// Counters touched within the last month, re-aggregated per type.
    pub async fn activity_summary(&self, user_id: Uuid) -> Result<Vec<ActivitySummaryEntry>> {
        let entries = sqlx::query_as::<_, ActivitySummaryEntry>(
            r#"
            SELECT activity_type,
                   SUM(activity_count)::BIGINT AS activity_count,
                   MAX(last_updated) AS last_updated
            FROM user_activity_summary
            WHERE user_id = $1
              AND last_updated >= NOW() - INTERVAL '1 month'
            GROUP BY activity_type
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    /// Profile plus recent log and summary. The profile lookup intentionally
    /// does not filter on is_deleted; soft-deleted users keep a readable
    /// activity history here.
    pub async fn get_activity(&self, user_id: Uuid) -> Result<ActivityResponse> {
        let user = sqlx::query_as::<_, UserProfile>(
            "SELECT name, email, role FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

        let recent_activities = self.recent_activities(user_id).await?;
        let activity_summary = self.activity_summary(user_id).await?;

        Ok(ActivityResponse {
            user,
            recent_activities,
            activity_summary,
        })
    }
}
