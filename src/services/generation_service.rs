use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::json;

use crate::{
    config::Config,
    constants::quiz_prompt::{build_quiz_prompt, QUIZ_SYSTEM_PROMPT},
    errors::{AppError, AppResult},
    models::{
        domain::{Question, QuizConfiguration},
        dto::generated::{ChatCompletionEnvelope, GeneratedPayload, GeneratedQuiz},
    },
    services::session_controller::GENERATION_FAILED_MESSAGE,
};

pub const MISSING_API_KEY_MESSAGE: &str = "API Key is missing.";

/// Produces the question list for a configuration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, config: &QuizConfiguration) -> AppResult<Vec<Question>>;
}

/// Generator backed by an OpenAI-compatible chat completions endpoint.
pub struct LlmQuestionGenerator {
    client: Option<Client<OpenAIConfig>>,
    model: String,
}

impl LlmQuestionGenerator {
    pub fn new(config: &Config) -> Self {
        let client = config.api_key.as_ref().map(|key| {
            let openai_config = OpenAIConfig::new()
                .with_api_key(key.expose_secret())
                .with_api_base(config.llm_api_base.as_str());
            Client::with_config(openai_config)
        });

        Self {
            client,
            model: config.llm_model.clone(),
        }
    }

    fn request_body(&self, config: &QuizConfiguration) -> AppResult<serde_json::Value> {
        let schema = serde_json::to_value(schemars::schema_for!(GeneratedQuiz))
            .map_err(|e| AppError::InternalError(format!("Failed to build response schema: {}", e)))?;

        Ok(json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": QUIZ_SYSTEM_PROMPT },
                { "role": "user", "content": build_quiz_prompt(config) }
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "quiz_questions",
                    "schema": schema
                }
            }
        }))
    }
}

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    async fn generate(&self, config: &QuizConfiguration) -> AppResult<Vec<Question>> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| AppError::GenerationFailed(MISSING_API_KEY_MESSAGE.to_string()))?;

        let request = self.request_body(config)?;

        log::info!(
            "Requesting {} question(s) from model {}",
            config.count,
            self.model
        );

        let response: ChatCompletionEnvelope =
            client.chat().create_byot(request).await.map_err(|e| {
                log::error!("Generation request failed: {}", e);
                AppError::GenerationFailed(GENERATION_FAILED_MESSAGE.to_string())
            })?;

        let content = response.into_content().ok_or_else(|| {
            log::error!("Generation response had no content");
            AppError::GenerationFailed(GENERATION_FAILED_MESSAGE.to_string())
        })?;

        let questions = parse_generated_questions(&content)?;
        if questions.is_empty() {
            log::error!("Generation response contained no questions");
            return Err(AppError::GenerationFailed(
                GENERATION_FAILED_MESSAGE.to_string(),
            ));
        }

        check_against_request(config, &questions);
        Ok(questions)
    }
}

/// Parses the model's JSON answer into questions with ids 1..=N in receipt
/// order. Options are forced to three; the list itself is kept as received.
pub fn parse_generated_questions(content: &str) -> AppResult<Vec<Question>> {
    let payload: GeneratedPayload = serde_json::from_str(content.trim()).map_err(|e| {
        log::error!("Failed to parse generated questions: {}", e);
        AppError::GenerationFailed(GENERATION_FAILED_MESSAGE.to_string())
    })?;

    Ok(payload
        .into_questions()
        .into_iter()
        .zip(1u32..)
        .map(|(generated, id)| generated.into_question(id))
        .collect())
}

/// Logs where the generated quiz departs from what was asked for. Nothing is
/// rejected: the correctness mode is trusted to the upstream model.
fn check_against_request(config: &QuizConfiguration, questions: &[Question]) {
    if questions.len() != config.count as usize {
        log::warn!(
            "Requested {} question(s) but received {}",
            config.count,
            questions.len()
        );
    }

    let (min, max) = config.correct_mode.allowed_correct_counts();
    for question in questions {
        let n = question.correct_indices.len();
        if n < min || n > max {
            log::warn!(
                "Question {} has {} correct option(s), outside {:?}",
                question.id,
                n,
                config.correct_mode
            );
        }
    }
}
