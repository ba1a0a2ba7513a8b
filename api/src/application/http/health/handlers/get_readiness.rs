use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::{Response, SUCCESS_MESSAGE};
use crate::application::http::server::app_state::AppState;
use aciiverse_core::domain::health::entities::DataHealthStatus;
use aciiverse_core::domain::health::ports::HealthCheckService;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReadinessResponse {
    pub message: String,
    pub data: DataHealthStatus,
}

#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    summary = "Readiness",
    description = "Checks that the game data can be loaded.",
    responses(
        (status = 200, body = ReadinessResponse),
        (status = 404, body = ApiErrorResponse, description = "Game data unavailable")
    ),
)]
pub async fn get_readiness(
    State(state): State<AppState>,
) -> Result<Response<ReadinessResponse>, ApiError> {
    let data = state.service.readiness().await.map_err(ApiError::from)?;

    Ok(Response::OK(ReadinessResponse {
        message: SUCCESS_MESSAGE.to_string(),
        data,
    }))
}
