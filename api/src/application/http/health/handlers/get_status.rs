use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use aciiverse_core::domain::health::ports::HealthCheckService;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StatusResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Service status",
    description = "Liveness message with the current server time.",
    responses(
        (status = 200, body = StatusResponse)
    ),
)]
pub async fn get_status(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    let status = state.service.status().await.map_err(ApiError::from)?;

    Ok(Json(StatusResponse {
        message: status.message(),
    }))
}
