use std::path::{Path, PathBuf};

use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError, game::ports::GameRepository,
    query::value_objects::Record,
};
use crate::infrastructure::game::mappers::GameCatalog;

/// Reads the whole catalog from a JSON file on every fetch, so edits to the
/// file show up without a restart.
#[derive(Debug, Clone)]
pub struct JsonFileGameRepository {
    path: PathBuf,
}

impl JsonFileGameRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GameRepository for JsonFileGameRepository {
    async fn fetch_games(&self) -> Result<Vec<Record>, CoreError> {
        let raw = tokio::fs::read(&self.path).await.map_err(|e| {
            error!(path = %self.path.display(), "Failed to read game data: {}", e);
            CoreError::DataUnavailable
        })?;

        let catalog: GameCatalog = serde_json::from_slice(&raw).map_err(|e| {
            error!(path = %self.path.display(), "Failed to parse game data: {}", e);
            CoreError::DataUnavailable
        })?;

        Ok(catalog.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/games.json")
    }

    #[tokio::test]
    async fn test_fetch_games_from_file() {
        let repository = JsonFileGameRepository::new(fixture_path());
        let games = repository.fetch_games().await.unwrap();

        assert_eq!(games.len(), 20);
        assert_eq!(games[0].get("id"), Some(&serde_json::json!(1)));
        let keys: Vec<&String> = games[0].keys().collect();
        assert_eq!(
            keys,
            vec!["id", "title", "description", "release", "developingLanguage", "developer"]
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let repository = JsonFileGameRepository::new("does/not/exist.json");
        assert_eq!(
            repository.fetch_games().await,
            Err(CoreError::DataUnavailable)
        );
    }

    #[tokio::test]
    async fn test_invalid_document_is_unavailable() {
        let repository = JsonFileGameRepository::new(
            Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml"),
        );
        assert_eq!(
            repository.fetch_games().await,
            Err(CoreError::DataUnavailable)
        );
    }
}
