use tracing::info;

use crate::{
    domain::common::{AciiverseConfig, services::Service},
    infrastructure::game::JsonFileGameRepository,
};

pub type AciiverseService = Service<JsonFileGameRepository>;

pub fn create_service(config: AciiverseConfig) -> AciiverseService {
    let game_repository = JsonFileGameRepository::new(config.data.file_path);
    info!(path = %game_repository.path().display(), "serving games from data file");

    Service::new(game_repository)
}
