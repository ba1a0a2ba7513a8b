use aciiverse_core::domain::game::value_objects::GameDraft;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameValidator {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "release is required"))]
    pub release: String,

    #[validate(length(min = 1, message = "developingLanguage is required"))]
    pub developing_language: String,

    #[validate(length(min = 1, message = "developer is required"))]
    pub developer: String,
}

impl From<GameValidator> for GameDraft {
    fn from(payload: GameValidator) -> Self {
        GameDraft {
            title: payload.title,
            description: payload.description,
            release: payload.release,
            developing_language: payload.developing_language,
            developer: payload.developer,
        }
    }
}
