use crate::application::http::game::validators::GameValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::{Response, SUCCESS_MESSAGE};
use crate::application::http::server::app_state::AppState;
use aciiverse_core::domain::game::entities::Game;
use aciiverse_core::domain::game::ports::GameService;
use aciiverse_core::domain::game::value_objects::CreateGameInput;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateGameResponse {
    pub message: String,
    pub data: Game,
}

#[utoipa::path(
    post,
    path = "",
    tag = "game",
    summary = "Create game",
    description = "Validates a new game and returns it with its assigned id.",
    responses(
        (status = 201, body = CreateGameResponse),
        (status = 406, body = ApiErrorResponse, description = "Invalid data")
    ),
    request_body = GameValidator
)]
pub async fn create_game(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GameValidator>,
) -> Result<Response<CreateGameResponse>, ApiError> {
    let game = state
        .service
        .create_game(CreateGameInput {
            draft: payload.into(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateGameResponse {
        message: SUCCESS_MESSAGE.to_string(),
        data: game,
    }))
}
