use crate::application::http::query_extractor::QueryParamsExtractor;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::{Response, SUCCESS_MESSAGE};
use crate::application::http::server::app_state::AppState;
use aciiverse_core::domain::game::ports::GameService;
use aciiverse_core::domain::query::value_objects::Record;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters understood by the collection endpoint. Values are JSON
/// except `$top` and `$skip`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetGamesQuery {
    /// Predicate `{property, operator, value}` or composite `{filters, and}`
    #[serde(rename = "$filters")]
    pub filters: Option<String>,
    /// `{property, ascending}` or a list of them
    #[serde(rename = "$orderBy")]
    pub order_by: Option<String>,
    /// List of field names to return
    #[serde(rename = "$select")]
    pub select: Option<String>,
    #[serde(rename = "$top")]
    pub top: Option<String>,
    #[serde(rename = "$skip")]
    pub skip: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetGamesResponse {
    pub message: String,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Record>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "game",
    summary = "Get games",
    description = "Retrieves the games matching the query, ordered, paged and projected as requested.",
    params(GetGamesQuery),
    responses(
        (status = 200, body = GetGamesResponse),
        (status = 404, body = ApiErrorResponse, description = "Game data unavailable")
    ),
)]
pub async fn get_games(
    State(state): State<AppState>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<GetGamesResponse>, ApiError> {
    let games = state
        .service
        .get_games(query_params)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetGamesResponse {
        message: SUCCESS_MESSAGE.to_string(),
        data: games,
    }))
}
