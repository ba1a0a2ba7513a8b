use crate::application::http::game::handlers::parse_game_id;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::{Response, SUCCESS_MESSAGE};
use crate::application::http::server::app_state::AppState;
use aciiverse_core::domain::game::ports::GameService;
use aciiverse_core::domain::game::value_objects::DeleteGameInput;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteGameResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{game_id}",
    tag = "game",
    summary = "Delete game",
    description = "Deletes a game.",
    params(
        ("game_id" = i64, Path, description = "Game ID"),
    ),
    responses(
        (status = 202, body = DeleteGameResponse),
        (status = 404, body = ApiErrorResponse, description = "Game not found or data unavailable")
    ),
)]
pub async fn delete_game(
    Path(game_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteGameResponse>, ApiError> {
    let game_id = parse_game_id(&game_id)?;

    state
        .service
        .delete_game(DeleteGameInput { game_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Accepted(DeleteGameResponse {
        message: SUCCESS_MESSAGE.to_string(),
    }))
}
