use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::activity_dto::LogActivityPayload, error::Result,
    services::report_service::ReportService, AppState,
};

#[axum::debug_handler]
pub async fn get_user_activity(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let response = state.activity_service.get_activity(user_id).await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn log_activity(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<LogActivityPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state
        .activity_service
        .record_activity(user_id, &payload.activity_type, payload.details.as_deref())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Activity logged successfully" })),
    ))
}

/// Generates the activity report. Producing the report is itself an
/// accounted activity, so the download is recorded before the data fetch and
/// may show up in its own output.
#[axum::debug_handler]
pub async fn download_activity_pdf(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let user = state
        .user_service
        .find_active(user_id)
        .await?
        .ok_or_else(|| crate::error::Error::NotFound("User not found".into()))?;

    state
        .activity_service
        .record_activity(user_id, "pdf_download", Some("Downloaded activity report"))
        .await?;

    let activities = state.activity_service.recent_activities(user_id).await?;
    let summary = state.activity_service.activity_summary(user_id).await?;

    let profile = crate::models::user::UserProfile {
        name: user.name,
        email: user.email,
        role: user.role,
    };
    let buffer = ReportService::generate_activity_report(&profile, &activities, &summary)?;

    let disposition = format!("attachment; filename=user-activity-{}.pdf", user_id);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        buffer,
    ))
}
