use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Every field a game needs, without the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameDraft {
    pub title: String,
    pub description: String,
    pub release: String,
    pub developing_language: String,
    pub developer: String,
}

impl GameDraft {
    /// Names of the fields left blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("description", &self.description),
            ("release", &self.release),
            ("developingLanguage", &self.developing_language),
            ("developer", &self.developer),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

pub struct GetGameInput {
    pub game_id: i64,
}

pub struct CreateGameInput {
    pub draft: GameDraft,
}

pub struct UpdateGameInput {
    pub game_id: i64,
    pub draft: GameDraft,
}

pub struct DeleteGameInput {
    pub game_id: i64,
}
