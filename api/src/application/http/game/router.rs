use super::handlers::create_game::{__path_create_game, create_game};
use super::handlers::delete_game::{__path_delete_game, delete_game};
use super::handlers::get_game::{__path_get_game, get_game};
use super::handlers::get_games::{__path_get_games, get_games};
use super::handlers::update_game::{__path_update_game, update_game};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_games, get_game, create_game, update_game, delete_game))]
pub struct GameApiDoc;

pub fn game_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/games", state.args.server.root_path),
            get(get_games),
        )
        .route(
            &format!("{}/games/{{game_id}}", state.args.server.root_path),
            get(get_game),
        )
        .route(
            &format!("{}/games", state.args.server.root_path),
            post(create_game),
        )
        .route(
            &format!("{}/games/{{game_id}}", state.args.server.root_path),
            put(update_game),
        )
        .route(
            &format!("{}/games/{{game_id}}", state.args.server.root_path),
            delete(delete_game),
        )
}
