use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Question, QuizConfiguration, SessionView},
        dto::response::{QuestionReview, ResetResponse, Score, SessionSnapshot},
    },
    services::{
        generation_service::QuestionGenerator, scoring_service::ScoringService,
        session_controller::SessionController,
    },
};

/// Async front of the session: owns the controller and the generator.
///
/// The lock is never held across the generation request. Events arriving
/// while the session is LOADING are refused by the controller, and a reset
/// in that window is ignored rather than cancelling the request.
pub struct SessionService {
    controller: Arc<RwLock<SessionController>>,
    generator: Arc<dyn QuestionGenerator>,
}

impl SessionService {
    pub fn new(generator: Arc<dyn QuestionGenerator>) -> Self {
        Self {
            controller: Arc::new(RwLock::new(SessionController::new())),
            generator,
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.controller.read().await.snapshot()
    }

    /// SETUP -> LOADING -> QUIZ, or back to SETUP with an error message on
    /// failure. The failure is reported through the snapshot, not as `Err`.
    ///
    /// Generation runs on its own task, so the session leaves LOADING even
    /// when the caller goes away before it settles.
    pub async fn start_quiz(&self, config: QuizConfiguration) -> AppResult<SessionSnapshot> {
        self.controller.write().await.start(config.clone())?;

        let controller = Arc::clone(&self.controller);
        let generator = Arc::clone(&self.generator);
        let generation = tokio::spawn(async move {
            let outcome = generator.generate(&config).await;
            settle_generation(&controller, outcome).await
        });

        match generation.await {
            Ok(snapshot) => Ok(snapshot),
            Err(e) => {
                log::error!("Quiz generation task failed: {}", e);
                let failed = AppError::InternalError(e.to_string());
                Ok(settle_generation(&self.controller, Err(failed)).await)
            }
        }
    }

    pub async fn toggle_option(&self, option_index: u32) -> AppResult<SessionSnapshot> {
        let mut controller = self.controller.write().await;
        controller.toggle_option(option_index)?;
        Ok(controller.snapshot())
    }

    pub async fn submit_answer(&self, confirm_empty: bool) -> AppResult<SessionSnapshot> {
        let mut controller = self.controller.write().await;
        controller.submit_answer(confirm_empty)?;
        Ok(controller.snapshot())
    }

    pub async fn next_question(&self) -> AppResult<SessionSnapshot> {
        let mut controller = self.controller.write().await;
        controller.next_question()?;
        Ok(controller.snapshot())
    }

    pub async fn reset(&self) -> ResetResponse {
        let mut controller = self.controller.write().await;
        let applied = controller.reset();
        ResetResponse {
            applied,
            session: controller.snapshot(),
        }
    }

    pub async fn score(&self) -> AppResult<Score> {
        let controller = self.controller.read().await;
        require_results(&controller)?;
        Ok(ScoringService::score(
            controller.questions(),
            controller.results(),
        ))
    }

    pub async fn review(&self) -> AppResult<Vec<QuestionReview>> {
        let controller = self.controller.read().await;
        require_results(&controller)?;
        Ok(ScoringService::review(
            controller.questions(),
            controller.results(),
        ))
    }
}

/// Applies a generation outcome to a LOADING session.
async fn settle_generation(
    controller: &RwLock<SessionController>,
    outcome: AppResult<Vec<Question>>,
) -> SessionSnapshot {
    let mut controller = controller.write().await;
    match outcome {
        Ok(questions) => {
            // An empty list is recorded by the controller as a failure.
            if let Err(e) = controller.accept_questions(questions) {
                log::debug!("Generated quiz rejected: {}", e);
            }
        }
        Err(e) => controller.fail_generation(user_message(e)),
    }
    controller.snapshot()
}

fn require_results(controller: &SessionController) -> AppResult<()> {
    if controller.view() != SessionView::Results {
        return Err(AppError::InvalidState(format!(
            "Results are not available while the session is in {}",
            controller.view()
        )));
    }
    Ok(())
}

/// Text shown to the user for a failed generation.
fn user_message(err: AppError) -> String {
    match err {
        AppError::GenerationFailed(message) => message,
        other => {
            log::error!("Unexpected error during generation: {}", other);
            crate::services::session_controller::GENERATION_FAILED_MESSAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::generation_service::MockQuestionGenerator;
    use crate::test_utils::fixtures::{sample_configuration, sample_questions};

    fn service_returning(questions: Vec<Question>) -> SessionService {
        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(move |_| Ok(questions.clone()));
        SessionService::new(Arc::new(generator))
    }

    #[tokio::test]
    async fn start_quiz_stores_generated_questions() {
        let service = service_returning(sample_questions(3));

        let snapshot = service.start_quiz(sample_configuration(3)).await.unwrap();

        assert_eq!(snapshot.view, SessionView::Quiz);
        assert_eq!(snapshot.question_count, 3);
        assert!(snapshot.error.is_none());
        assert_eq!(snapshot.current.expect("quiz is running").id, 1);
    }

    #[tokio::test]
    async fn generator_receives_the_configuration() {
        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .withf(|config| config.count == 5 && config.topic == "Rezoluțiunea contractului")
            .times(1)
            .returning(|_| Ok(sample_questions(5)));
        let service = SessionService::new(Arc::new(generator));

        let snapshot = service.start_quiz(sample_configuration(5)).await.unwrap();

        assert_eq!(snapshot.question_count, 5);
    }

    #[tokio::test]
    async fn generator_failure_is_reported_in_snapshot() {
        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_| Err(AppError::GenerationFailed("API Key is missing.".into())));
        let service = SessionService::new(Arc::new(generator));

        let snapshot = service.start_quiz(sample_configuration(3)).await.unwrap();

        assert_eq!(snapshot.view, SessionView::Setup);
        assert_eq!(snapshot.error.as_deref(), Some("API Key is missing."));
        assert_eq!(snapshot.question_count, 0);
        assert!(snapshot.current.is_none());
    }

    #[tokio::test]
    async fn unexpected_generator_error_gets_generic_message() {
        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(AppError::InternalError("socket closed".into())));
        let service = SessionService::new(Arc::new(generator));

        let snapshot = service.start_quiz(sample_configuration(3)).await.unwrap();

        assert_eq!(
            snapshot.error.as_deref(),
            Some(crate::services::session_controller::GENERATION_FAILED_MESSAGE)
        );
    }

    #[tokio::test]
    async fn crashed_generation_task_returns_to_setup() {
        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .returning(|_| panic!("generator crashed"));
        let service = SessionService::new(Arc::new(generator));

        let snapshot = service.start_quiz(sample_configuration(2)).await.unwrap();

        assert_eq!(snapshot.view, SessionView::Setup);
        assert!(snapshot.can_reset);
        assert_eq!(
            snapshot.error.as_deref(),
            Some(crate::services::session_controller::GENERATION_FAILED_MESSAGE)
        );
    }

    #[tokio::test]
    async fn score_is_unavailable_before_results() {
        let service = service_returning(sample_questions(1));
        service.start_quiz(sample_configuration(1)).await.unwrap();

        let err = service.score().await.unwrap_err();

        assert!(matches!(err, AppError::InvalidState(_)));
    }

    #[tokio::test]
    async fn full_run_scores_and_reviews() {
        let service = service_returning(sample_questions(2));
        service.start_quiz(sample_configuration(2)).await.unwrap();

        service.toggle_option(0).await.unwrap();
        service.submit_answer(false).await.unwrap();
        service.next_question().await.unwrap();
        service.submit_answer(true).await.unwrap();
        let snapshot = service.next_question().await.unwrap();
        assert_eq!(snapshot.view, SessionView::Results);

        let score = service.score().await.unwrap();
        assert_eq!((score.correct_count, score.total, score.percentage), (1, 2, 50));

        let review = service.review().await.unwrap();
        assert_eq!(review.len(), 2);
        assert!(review[0].is_correct);
        assert!(!review[1].is_correct);

        let reset = service.reset().await;
        assert!(reset.applied);
        assert_eq!(reset.session.view, SessionView::Setup);
    }
}
