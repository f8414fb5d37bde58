use std::sync::Arc;

use crate::{
    config::Config,
    services::{LlmQuestionGenerator, QuestionGenerator, SessionService},
};

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let generator = Arc::new(LlmQuestionGenerator::new(&config));
        Self::with_generator(config, generator)
    }

    pub fn with_generator(config: Config, generator: Arc<dyn QuestionGenerator>) -> Self {
        let session_service = Arc::new(SessionService::new(generator));

        Self {
            session_service,
            config: Arc::new(config),
        }
    }
}
