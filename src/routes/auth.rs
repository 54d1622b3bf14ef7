use axum::{extract::State, response::IntoResponse, Json};

use crate::{dto::auth_dto::LoginPayload, error::Result, AppState};

/// Session issuance lives in the dashboard's own auth layer; this endpoint
/// only verifies credentials and returns the profile. A malformed email is
/// indistinguishable from an unknown one.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    let user = state
        .auth_service
        .authenticate(&state.activity_service, &payload.email, &payload.password)
        .await?;
    Ok(Json(user))
}
