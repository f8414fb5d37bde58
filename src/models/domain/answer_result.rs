use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one submitted question. Created once, never modified.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct AnswerResult {
    pub question_id: u32,
    pub selected_indices: Vec<u32>, // sorted, no repeats
    pub is_correct: bool,
    pub submitted_at: DateTime<Utc>,
}

impl AnswerResult {
    pub fn new(question_id: u32, selected_indices: Vec<u32>, is_correct: bool) -> Self {
        AnswerResult {
            question_id,
            selected_indices,
            is_correct,
            submitted_at: Utc::now(),
        }
    }
}
