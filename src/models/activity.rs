use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single row of the append-only activity log.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityEntry {
    pub activity_type: String,
    pub activity_timestamp: DateTime<Utc>,
    pub details: Option<String>,
}

/// Per-type running counter, re-aggregated over the report window.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivitySummaryEntry {
    pub activity_type: String,
    pub activity_count: i64,
    pub last_updated: DateTime<Utc>,
}
