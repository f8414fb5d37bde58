use chrono::{DateTime, Utc};

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{question::option_letter, AnswerResult, Question, QuizConfiguration, SessionView},
        dto::response::{CurrentQuestion, OptionView, SessionSnapshot, Verdict},
    },
    services::question_runner::{Advance, QuestionRunner},
};

pub const GENERATION_FAILED_MESSAGE: &str =
    "Eroare la generare. Încearcă un număr mai mic de grile.";
pub const EMPTY_QUIZ_MESSAGE: &str = "Nu a fost generată nicio grilă. Încearcă din nou.";

#[derive(Debug, Clone, PartialEq)]
enum Stage {
    Setup,
    Loading,
    Quiz(QuestionRunner),
    Results,
}

/// Lifecycle of a single quiz session: SETUP -> LOADING -> QUIZ -> RESULTS.
///
/// Sole owner of the question list and the finished results list. All
/// transitions are synchronous; the generation request itself is issued by
/// `SessionService` between `start` and `accept_questions`/`fail_generation`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionController {
    stage: Stage,
    configuration: Option<QuizConfiguration>,
    questions: Vec<Question>,
    results: Vec<AnswerResult>,
    error: Option<String>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionController {
    pub fn new() -> Self {
        Self {
            stage: Stage::Setup,
            configuration: None,
            questions: Vec::new(),
            results: Vec::new(),
            error: None,
            started_at: None,
            finished_at: None,
        }
    }

    pub fn view(&self) -> SessionView {
        match self.stage {
            Stage::Setup => SessionView::Setup,
            Stage::Loading => SessionView::Loading,
            Stage::Quiz(_) => SessionView::Quiz,
            Stage::Results => SessionView::Results,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn results(&self) -> &[AnswerResult] {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn configuration(&self) -> Option<&QuizConfiguration> {
        self.configuration.as_ref()
    }

    pub fn runner(&self) -> Option<&QuestionRunner> {
        match &self.stage {
            Stage::Quiz(runner) => Some(runner),
            _ => None,
        }
    }

    /// Reset is disabled while a generation request is in flight.
    pub fn can_reset(&self) -> bool {
        !matches!(self.stage, Stage::Loading)
    }

    /// SETUP -> LOADING. Clears any previous error.
    pub fn start(&mut self, configuration: QuizConfiguration) -> AppResult<()> {
        self.expect_view(SessionView::Setup, "start a quiz")?;

        log::info!(
            "Starting quiz generation: {} question(s), codes {:?}, mode {:?}",
            configuration.count,
            configuration.codes,
            configuration.correct_mode
        );

        self.stage = Stage::Loading;
        self.error = None;
        self.questions.clear();
        self.results.clear();
        self.configuration = Some(configuration);
        self.started_at = None;
        self.finished_at = None;
        Ok(())
    }

    /// LOADING -> QUIZ with the generated questions. An empty list counts as
    /// a generation failure and goes back to SETUP.
    pub fn accept_questions(&mut self, questions: Vec<Question>) -> AppResult<()> {
        self.expect_view(SessionView::Loading, "accept generated questions")?;

        if questions.is_empty() {
            self.fail_generation(EMPTY_QUIZ_MESSAGE);
            return Err(AppError::GenerationFailed(EMPTY_QUIZ_MESSAGE.to_string()));
        }

        log::info!("Quiz ready with {} question(s)", questions.len());

        self.stage = Stage::Quiz(QuestionRunner::new(questions.len()));
        self.questions = questions;
        self.results.clear();
        self.started_at = Some(Utc::now());
        Ok(())
    }

    /// LOADING -> SETUP, keeping `message` for display. Ignored in any other
    /// state.
    pub fn fail_generation(&mut self, message: impl Into<String>) {
        if self.view() != SessionView::Loading {
            return;
        }

        let message = message.into();
        log::warn!("Quiz generation failed: {}", message);

        self.stage = Stage::Setup;
        self.error = Some(message);
        self.questions.clear();
        self.results.clear();
    }

    /// QUIZ -> RESULTS with the full result list of the run.
    pub fn finish(&mut self, results: Vec<AnswerResult>) -> AppResult<()> {
        self.expect_view(SessionView::Quiz, "finish the quiz")?;

        log::info!(
            "Quiz finished: {}/{} correct",
            results.iter().filter(|r| r.is_correct).count(),
            self.questions.len()
        );

        self.stage = Stage::Results;
        self.results = results;
        self.finished_at = Some(Utc::now());
        Ok(())
    }

    /// Any state -> SETUP, dropping questions, results and error. Returns
    /// false, changing nothing, while generation is in flight.
    pub fn reset(&mut self) -> bool {
        if !self.can_reset() {
            log::debug!("Reset ignored while quiz generation is in flight");
            return false;
        }

        *self = Self::new();
        true
    }

    pub fn toggle_option(&mut self, option_index: u32) -> AppResult<bool> {
        let (runner, question) = self.current_mut()?;
        let option_count = question.option_count();
        runner.toggle_selection(option_index, option_count)
    }

    pub fn submit_answer(&mut self, confirm_empty: bool) -> AppResult<AnswerResult> {
        let (runner, question) = self.current_mut()?;
        runner.submit(question, confirm_empty)
    }

    /// Moves to the next question, or straight to RESULTS after the last one.
    pub fn next_question(&mut self) -> AppResult<SessionView> {
        let (runner, _) = self.current_mut()?;
        match runner.advance()? {
            Advance::Next(_) => Ok(SessionView::Quiz),
            Advance::Finished(results) => {
                self.finish(results)?;
                Ok(SessionView::Results)
            }
        }
    }

    pub fn progress(&self) -> f64 {
        match &self.stage {
            Stage::Quiz(runner) => runner.progress(),
            Stage::Results => 1.0,
            Stage::Setup | Stage::Loading => 0.0,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let answered_count = match &self.stage {
            Stage::Quiz(runner) => runner.results().len(),
            _ => self.results.len(),
        };

        SessionSnapshot {
            view: self.view(),
            error: self.error.clone(),
            configuration: self.configuration.clone(),
            question_count: self.questions.len() as u32,
            answered_count: answered_count as u32,
            progress: self.progress(),
            current: self.current_question(),
            can_reset: self.can_reset(),
            started_at: self.started_at,
            finished_at: self.finished_at,
        }
    }

    fn current_question(&self) -> Option<CurrentQuestion> {
        let runner = self.runner()?;
        let question = self.questions.get(runner.current_index())?;
        let selected = runner.selection();

        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(i, text)| OptionView {
                index: i as u32,
                letter: option_letter(i),
                text: text.clone(),
                selected: selected.contains(&(i as u32)),
            })
            .collect();

        let verdict = runner.current_result().map(|result| Verdict {
            is_correct: result.is_correct,
            correct_indices: question.correct_indices.clone(),
            explanation: question.explanation.clone(),
        });

        let position = runner.current_index() as u32 + 1;
        let total = runner.total() as u32;

        Some(CurrentQuestion {
            id: question.id,
            position,
            total,
            position_label: format!("Grila {} din {}", position, total),
            text: question.text.clone(),
            options,
            phase: runner.phase(),
            selected_indices: selected,
            is_last: runner.is_last(),
            verdict,
        })
    }

    fn current_mut(&mut self) -> AppResult<(&mut QuestionRunner, &Question)> {
        let view = self.view();
        match &mut self.stage {
            Stage::Quiz(runner) => {
                let question = self.questions.get(runner.current_index()).ok_or_else(|| {
                    AppError::InternalError(format!(
                        "No question at index {}",
                        runner.current_index()
                    ))
                })?;
                Ok((runner, question))
            }
            _ => Err(AppError::InvalidState(format!(
                "No quiz is running (session is in {})",
                view
            ))),
        }
    }

    fn expect_view(&self, expected: SessionView, action: &str) -> AppResult<()> {
        let current = self.view();
        if current != expected {
            return Err(AppError::InvalidState(format!(
                "Cannot {} while the session is in {}",
                action, current
            )));
        }
        Ok(())
    }
}
