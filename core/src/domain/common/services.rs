use crate::domain::game::ports::GameRepository;

#[derive(Clone, Debug)]
pub struct Service<G>
where
    G: GameRepository,
{
    pub(crate) game_repository: G,
}

impl<G> Service<G>
where
    G: GameRepository,
{
    pub fn new(game_repository: G) -> Self {
        Self { game_repository }
    }
}
