use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    game::{
        entities::Game,
        value_objects::{CreateGameInput, DeleteGameInput, GetGameInput, UpdateGameInput},
    },
    query::value_objects::{GetQueryParams, Record},
};

#[cfg_attr(test, mockall::automock)]
pub trait GameService: Send + Sync {
    /// Runs the collection query over the current record set.
    fn get_games(
        &self,
        query: GetQueryParams,
    ) -> impl Future<Output = Result<Vec<Record>, CoreError>> + Send;

    fn get_game(
        &self,
        input: GetGameInput,
    ) -> impl Future<Output = Result<Record, CoreError>> + Send;

    fn create_game(
        &self,
        input: CreateGameInput,
    ) -> impl Future<Output = Result<Game, CoreError>> + Send;

    fn update_game(
        &self,
        input: UpdateGameInput,
    ) -> impl Future<Output = Result<Game, CoreError>> + Send;

    fn delete_game(
        &self,
        input: DeleteGameInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Source of the game records. Every call returns a fresh copy of the whole
/// set, or [`CoreError::DataUnavailable`] when the store cannot be read.
#[cfg_attr(test, mockall::automock)]
pub trait GameRepository: Send + Sync {
    fn fetch_games(&self) -> impl Future<Output = Result<Vec<Record>, CoreError>> + Send;
}
