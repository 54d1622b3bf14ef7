use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::user_dto::{CreateUserPayload, UpdateUserPayload},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state.user_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .user_service
        .update_user(id, payload)
        .await?
        .ok_or_else(|| crate::error::Error::NotFound("User not found".into()))?;
    Ok(Json(user))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state
        .user_service
        .soft_delete_user(id)
        .await?
        .ok_or_else(|| crate::error::Error::NotFound("User not found".into()))?;
    Ok(Json(json!({ "message": "User deleted successfully" })))
}
