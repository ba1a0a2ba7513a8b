use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::value_objects::GameDraft;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub release: String,
    pub developing_language: String,
    pub developer: String,
}

impl Game {
    pub fn new(id: i64, draft: GameDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            release: draft.release,
            developing_language: draft.developing_language,
            developer: draft.developer,
        }
    }
}
