use serde::{Deserialize, Serialize};

use crate::domain::query::value_objects::Record;

/// Layout of the backing data file: `{"games": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameCatalog {
    #[serde(default)]
    pub games: Vec<Record>,
}

impl From<GameCatalog> for Vec<Record> {
    fn from(catalog: GameCatalog) -> Self {
        catalog.games
    }
}
