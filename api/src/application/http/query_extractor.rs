use aciiverse_core::domain::query::value_objects::GetQueryParams;
use axum::{extract::FromRequestParts, http::request::Parts, response::Response};
use std::collections::HashMap;

/// Extractor for the `$filters`, `$orderBy`, `$select`, `$top` and `$skip`
/// query parameters. Never rejects: undecodable parameters are left out.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     QueryParamsExtractor(query_params): QueryParamsExtractor,
/// ) -> Result<Response<GetGamesResponse>, ApiError> {
///     // Use query_params.filters, query_params.order_by, query_params.top ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryParamsExtractor(pub GetQueryParams);

impl<S> FromRequestParts<S> for QueryParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Parse query string into HashMap
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(QueryParamsExtractor(GetQueryParams::from_query_map(
            &query_map,
        )))
    }
}
