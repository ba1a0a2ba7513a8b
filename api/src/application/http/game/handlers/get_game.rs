use crate::application::http::game::handlers::parse_game_id;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::{Response, SUCCESS_MESSAGE};
use crate::application::http::server::app_state::AppState;
use aciiverse_core::domain::game::ports::GameService;
use aciiverse_core::domain::game::value_objects::GetGameInput;
use aciiverse_core::domain::query::value_objects::Record;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetGameResponse {
    pub message: String,
    #[schema(value_type = Object)]
    pub data: Record,
}

#[utoipa::path(
    get,
    path = "/{game_id}",
    tag = "game",
    summary = "Get game",
    description = "Retrieves a single game by its id.",
    params(
        ("game_id" = i64, Path, description = "Game ID"),
    ),
    responses(
        (status = 200, body = GetGameResponse),
        (status = 404, body = ApiErrorResponse, description = "Game not found or data unavailable")
    ),
)]
pub async fn get_game(
    Path(game_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetGameResponse>, ApiError> {
    let game_id = parse_game_id(&game_id)?;

    let game = state
        .service
        .get_game(GetGameInput { game_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetGameResponse {
        message: SUCCESS_MESSAGE.to_string(),
        data: game,
    }))
}
