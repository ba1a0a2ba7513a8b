use std::sync::Arc;

use aciiverse_core::application::AciiverseService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: AciiverseService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: AciiverseService) -> Self {
        Self { args, service }
    }
}
