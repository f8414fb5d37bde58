use async_graphql::InputObject;
use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz_config::{
    normalize_topic, MAX_QUESTION_COUNT, MIN_QUESTION_COUNT,
};
use crate::models::domain::{
    CorrectAnswersMode, Difficulty, LegalCode, QuestionStyle, QuizConfiguration, SubjectSelection,
};

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct StartQuizRequest {
    #[validate(length(min = 1, message = "Select at least one legal code"))]
    pub codes: Vec<LegalCode>,

    #[validate(length(max = 500))]
    pub topic: Option<String>,

    pub difficulty: Difficulty,

    pub question_style: QuestionStyle,

    #[validate(range(min = MIN_QUESTION_COUNT, max = MAX_QUESTION_COUNT))]
    pub count: u32,

    pub correct_mode: CorrectAnswersMode,
}

impl TryFrom<StartQuizRequest> for QuizConfiguration {
    type Error = AppError;

    fn try_from(request: StartQuizRequest) -> AppResult<Self> {
        request.validate()?;

        let codes = SubjectSelection::from_codes(&request.codes)
            .ok_or_else(|| AppError::ValidationError("Select at least one legal code".into()))?
            .into_codes();

        Ok(QuizConfiguration {
            codes,
            topic: normalize_topic(request.topic.as_deref()),
            difficulty: request.difficulty,
            question_style: request.question_style,
            count: request.count,
            correct_mode: request.correct_mode,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleOptionRequest {
    pub option_index: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    #[serde(default)]
    pub confirm_empty: bool,
}
