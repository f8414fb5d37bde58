use async_graphql::{Enum, OutputType, SimpleObject};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{
    question::option_letter, AnswerPhase, CorrectAnswersMode, Difficulty, LegalCode, Question,
    QuestionStyle, QuizConfiguration, SessionView,
};

/// An enumeration value paired with its display label.
#[derive(Debug, Clone, Serialize, SimpleObject)]
#[graphql(concrete(name = "LegalCodeChoice", params(LegalCode)))]
#[graphql(concrete(name = "DifficultyChoice", params(Difficulty)))]
#[graphql(concrete(name = "QuestionStyleChoice", params(QuestionStyle)))]
#[graphql(concrete(name = "CorrectAnswersModeChoice", params(CorrectAnswersMode)))]
pub struct Choice<T: OutputType> {
    pub value: T,
    pub label: String,
}

impl<T: OutputType> Choice<T> {
    fn new(value: T, label: &str) -> Self {
        Choice {
            value,
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct ConfigurationOptions {
    pub legal_codes: Vec<Choice<LegalCode>>,
    pub difficulties: Vec<Choice<Difficulty>>,
    pub question_styles: Vec<Choice<QuestionStyle>>,
    pub correct_modes: Vec<Choice<CorrectAnswersMode>>,
    pub min_count: u32,
    pub max_count: u32,
    pub defaults: QuizConfiguration,
}

impl ConfigurationOptions {
    pub fn build() -> Self {
        use crate::models::domain::quiz_config::{MAX_QUESTION_COUNT, MIN_QUESTION_COUNT};

        ConfigurationOptions {
            legal_codes: LegalCode::ALL
                .iter()
                .map(|c| Choice::new(*c, c.label()))
                .collect(),
            difficulties: Difficulty::ALL
                .iter()
                .map(|d| Choice::new(*d, d.label()))
                .collect(),
            question_styles: QuestionStyle::ALL
                .iter()
                .map(|s| Choice::new(*s, s.label()))
                .collect(),
            correct_modes: CorrectAnswersMode::ALL
                .iter()
                .map(|m| Choice::new(*m, m.label()))
                .collect(),
            min_count: MIN_QUESTION_COUNT,
            max_count: MAX_QUESTION_COUNT,
            defaults: QuizConfiguration::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct OptionView {
    pub index: u32,
    pub letter: String,
    pub text: String,
    pub selected: bool,
}

/// Filled in only after the current question is submitted.
#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct Verdict {
    pub is_correct: bool,
    pub correct_indices: Vec<i32>,
    pub explanation: String,
}

/// The question on screen, without its answer until it is submitted.
#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct CurrentQuestion {
    pub id: u32,
    pub position: u32, // 1-based
    pub total: u32,
    pub position_label: String,
    pub text: String,
    pub options: Vec<OptionView>,
    pub phase: AnswerPhase,
    pub selected_indices: Vec<u32>,
    pub is_last: bool,
    pub verdict: Option<Verdict>,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct SessionSnapshot {
    pub view: SessionView,
    pub error: Option<String>,
    pub configuration: Option<QuizConfiguration>,
    pub question_count: u32,
    pub answered_count: u32,
    pub progress: f64,
    pub current: Option<CurrentQuestion>,
    pub can_reset: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct ResetResponse {
    /// False when the reset was ignored because generation is in flight.
    pub applied: bool,
    pub session: SessionSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum GradeBand {
    Failing,   // below 50
    Passing,   // 50 to 69
    Good,      // 70 to 89
    Excellent, // 90 and above
}

impl GradeBand {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => GradeBand::Excellent,
            70..=89 => GradeBand::Good,
            50..=69 => GradeBand::Passing,
            _ => GradeBand::Failing,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct Score {
    pub correct_count: u32,
    pub total: u32,
    pub percentage: u32,
    pub grade: GradeBand,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct OptionReview {
    pub index: u32,
    pub letter: String,
    pub text: String,
    pub selected: bool,
    pub correct: bool,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuestionReview {
    pub question_id: u32,
    pub position: u32,
    pub text: String,
    pub options: Vec<OptionReview>,
    pub selected_indices: Vec<u32>,
    pub correct_indices: Vec<i32>,
    pub is_correct: bool,
    pub explanation: String,
}

impl QuestionReview {
    pub fn build(position: u32, question: &Question, selected: &[u32], is_correct: bool) -> Self {
        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(i, text)| OptionReview {
                index: i as u32,
                letter: option_letter(i),
                text: text.clone(),
                selected: selected.contains(&(i as u32)),
                correct: question.is_correct_option(i),
            })
            .collect();

        QuestionReview {
            question_id: question.id,
            position,
            text: question.text.clone(),
            options,
            selected_indices: selected.to_vec(),
            correct_indices: question.correct_indices.clone(),
            is_correct,
            explanation: question.explanation.clone(),
        }
    }
}
