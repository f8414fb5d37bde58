pub mod generation_service;
pub mod question_runner;
pub mod scoring_service;
pub mod session_controller;
pub mod session_service;

pub use generation_service::{LlmQuestionGenerator, QuestionGenerator};
pub use session_service::SessionService;
