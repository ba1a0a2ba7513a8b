use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp, services::Service},
    game::ports::GameRepository,
    health::{
        entities::{DataHealthStatus, ServiceStatus},
        ports::HealthCheckService,
    },
};

impl<G> HealthCheckService for Service<G>
where
    G: GameRepository,
{
    async fn status(&self) -> Result<ServiceStatus, CoreError> {
        Ok(ServiceStatus {
            checked_at: generate_timestamp(),
        })
    }

    async fn readiness(&self) -> Result<DataHealthStatus, CoreError> {
        let games = self.game_repository.fetch_games().await?;

        Ok(DataHealthStatus { games: games.len() })
    }
}
