use crate::models::activity::{ActivityEntry, ActivitySummaryEntry};
use crate::models::user::UserProfile;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogActivityPayload {
    #[validate(length(min = 1))]
    pub activity_type: String,
    pub details: Option<String>,
}

/// Response shape of `GET /api/users/{userId}/activity`. The two list fields
/// keep the camelCase names the dashboard consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub user: UserProfile,
    #[serde(rename = "recentActivities")]
    pub recent_activities: Vec<ActivityEntry>,
    #[serde(rename = "activitySummary")]
    pub activity_summary: Vec<ActivitySummaryEntry>,
}
