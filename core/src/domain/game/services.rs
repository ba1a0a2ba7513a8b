use serde_json::Value;
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    game::{
        entities::Game,
        ports::{GameRepository, GameService},
        value_objects::{
            CreateGameInput, DeleteGameInput, GameDraft, GetGameInput, UpdateGameInput,
        },
    },
    query::{
        pipeline,
        value_objects::{GetQueryParams, Record},
    },
};

pub fn record_id(record: &Record) -> Option<i64> {
    record.get("id").and_then(Value::as_i64)
}

fn find_game(games: &[Record], game_id: i64) -> Option<&Record> {
    games.iter().find(|game| record_id(game) == Some(game_id))
}

fn ensure_complete(draft: &GameDraft) -> Result<(), CoreError> {
    let missing = draft.missing_fields();
    if missing.is_empty() {
        return Ok(());
    }

    Err(CoreError::Invalid(format!(
        "missing fields: {}",
        missing.join(", ")
    )))
}

impl<G> GameService for Service<G>
where
    G: GameRepository,
{
    #[instrument(skip(self, query))]
    async fn get_games(&self, query: GetQueryParams) -> Result<Vec<Record>, CoreError> {
        let games = self.game_repository.fetch_games().await?;
        let result = pipeline::run(&games, &query);

        tracing::debug!(
            total = games.len(),
            returned = result.len(),
            "games query executed"
        );

        Ok(result)
    }

    #[instrument(skip(self, input), fields(game_id = input.game_id))]
    async fn get_game(&self, input: GetGameInput) -> Result<Record, CoreError> {
        let games = self.game_repository.fetch_games().await?;

        find_game(&games, input.game_id)
            .cloned()
            .ok_or(CoreError::NotFound)
    }

    /// Writes are acknowledged but not stored: the record set is reloaded
    /// from the backing store on every read.
    #[instrument(skip(self, input))]
    async fn create_game(&self, input: CreateGameInput) -> Result<Game, CoreError> {
        ensure_complete(&input.draft)?;

        let games = self.game_repository.fetch_games().await?;
        let next_id = games.iter().filter_map(record_id).max().unwrap_or(0) + 1;

        let game = Game::new(next_id, input.draft);
        tracing::info!(game_id = game.id, "game accepted");

        Ok(game)
    }

    #[instrument(skip(self, input), fields(game_id = input.game_id))]
    async fn update_game(&self, input: UpdateGameInput) -> Result<Game, CoreError> {
        let games = self.game_repository.fetch_games().await?;
        ensure_complete(&input.draft)?;

        find_game(&games, input.game_id).ok_or(CoreError::NotFound)?;

        Ok(Game::new(input.game_id, input.draft))
    }

    #[instrument(skip(self, input), fields(game_id = input.game_id))]
    async fn delete_game(&self, input: DeleteGameInput) -> Result<(), CoreError> {
        let games = self.game_repository.fetch_games().await?;

        find_game(&games, input.game_id).ok_or(CoreError::NotFound)?;

        Ok(())
    }
}
