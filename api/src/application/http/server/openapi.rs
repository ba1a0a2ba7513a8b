use crate::application::http::game::router::GameApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aciiverse API"
    ),
    nest(
        (path = "/games", api = GameApiDoc),
    )
)]
pub struct ApiDoc;
