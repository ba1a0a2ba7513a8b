use crate::application::http::game::handlers::parse_game_id;
use crate::application::http::game::validators::GameValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::{Response, SUCCESS_MESSAGE};
use crate::application::http::server::app_state::AppState;
use aciiverse_core::domain::game::entities::Game;
use aciiverse_core::domain::game::ports::GameService;
use aciiverse_core::domain::game::value_objects::UpdateGameInput;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateGameResponse {
    pub message: String,
    pub data: Game,
}

#[utoipa::path(
    put,
    path = "/{game_id}",
    tag = "game",
    summary = "Update game",
    description = "Replaces every field of an existing game.",
    params(
        ("game_id" = i64, Path, description = "Game ID"),
    ),
    responses(
        (status = 202, body = UpdateGameResponse),
        (status = 404, body = ApiErrorResponse, description = "Game not found or data unavailable"),
        (status = 406, body = ApiErrorResponse, description = "Invalid data")
    ),
    request_body = GameValidator
)]
pub async fn update_game(
    Path(game_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GameValidator>,
) -> Result<Response<UpdateGameResponse>, ApiError> {
    let game_id = parse_game_id(&game_id)?;

    let game = state
        .service
        .update_game(UpdateGameInput {
            game_id,
            draft: payload.into(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Accepted(UpdateGameResponse {
        message: SUCCESS_MESSAGE.to_string(),
        data: game,
    }))
}
