pub mod create_game;
pub mod delete_game;
pub mod get_game;
pub mod get_games;
pub mod update_game;

use aciiverse_core::domain::common::entities::app_errors::CoreError;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Ids that are not integers can never match a game.
pub(crate) fn parse_game_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::from(CoreError::NotFound))
}
