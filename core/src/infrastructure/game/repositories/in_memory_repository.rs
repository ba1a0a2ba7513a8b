use std::sync::Arc;

use crate::domain::{
    common::entities::app_errors::CoreError, game::ports::GameRepository,
    query::value_objects::Record,
};

/// Fixed record set held in memory, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameRepository {
    games: Arc<Vec<Record>>,
}

impl InMemoryGameRepository {
    pub fn new(games: Vec<Record>) -> Self {
        Self {
            games: Arc::new(games),
        }
    }
}

impl GameRepository for InMemoryGameRepository {
    async fn fetch_games(&self) -> Result<Vec<Record>, CoreError> {
        Ok(self.games.as_ref().clone())
    }
}
