use super::handlers::get_readiness::{__path_get_readiness, get_readiness};
use super::handlers::get_status::{__path_get_status, get_status};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_status, get_readiness))]
pub struct HealthApiDoc;

/// The status message answers on the bare root path and with a trailing slash.
pub fn health_routes(root_path: &str) -> Router<AppState> {
    let mut router = Router::new()
        .route(&format!("{root_path}/"), get(get_status))
        .route(&format!("{root_path}/health/ready"), get(get_readiness));

    if !root_path.is_empty() {
        router = router.route(root_path, get(get_status));
    }

    router
}
