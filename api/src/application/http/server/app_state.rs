use std::sync::Arc;

use carnivore_core::application::CoachService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CoachService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CoachService) -> Self {
        Self { args, service }
    }
}
