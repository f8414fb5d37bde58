use std::collections::BTreeSet;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{AnswerPhase, AnswerResult, Question},
};

/// What `advance` did.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved on; holds the new 0-based index.
    Next(usize),
    /// The last question was done. Carries every result of the run, in order.
    Finished(Vec<AnswerResult>),
}

/// Walks the question list one question at a time.
///
/// Holds only transient state: the current index, the options ticked for the
/// current question, whether it has been submitted, and the results emitted
/// so far. The question list itself stays with the session controller and is
/// passed in where needed.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionRunner {
    total: usize,
    current_index: usize,
    selection: BTreeSet<u32>,
    phase: AnswerPhase,
    results: Vec<AnswerResult>,
}

impl QuestionRunner {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            current_index: 0,
            selection: BTreeSet::new(),
            phase: AnswerPhase::Unanswered,
            results: Vec::with_capacity(total),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn phase(&self) -> AnswerPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == AnswerPhase::Submitted
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.total
    }

    /// Current selection, ascending.
    pub fn selection(&self) -> Vec<u32> {
        self.selection.iter().copied().collect()
    }

    pub fn results(&self) -> &[AnswerResult] {
        &self.results
    }

    /// Result of the current question once it has been submitted.
    pub fn current_result(&self) -> Option<&AnswerResult> {
        if self.is_submitted() {
            self.results.last()
        } else {
            None
        }
    }

    /// Share of the run already answered, in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let answered = self.current_index + usize::from(self.is_submitted());
        answered as f64 / self.total as f64
    }

    /// Ticks or unticks an option. Returns whether the selection changed;
    /// after submission this is a no-op.
    pub fn toggle_selection(&mut self, option_index: u32, option_count: usize) -> AppResult<bool> {
        if self.is_submitted() {
            return Ok(false);
        }
        if option_index as usize >= option_count {
            return Err(AppError::ValidationError(format!(
                "Option index {} is out of range (question has {} options)",
                option_index, option_count
            )));
        }

        if !self.selection.remove(&option_index) {
            self.selection.insert(option_index);
        }
        Ok(true)
    }

    /// Verifies the current selection against `question` and records the
    /// result. An empty selection needs `confirm_empty`.
    pub fn submit(&mut self, question: &Question, confirm_empty: bool) -> AppResult<AnswerResult> {
        if self.is_submitted() {
            return Err(AppError::InvalidState(format!(
                "Question {} has already been submitted",
                question.id
            )));
        }
        if self.selection.is_empty() && !confirm_empty {
            return Err(AppError::ConfirmationRequired(
                "No option is selected; confirm to submit an empty answer".to_string(),
            ));
        }

        let selected = self.selection();
        let is_correct = is_exact_match(&selected, &question.correct_indices);
        let result = AnswerResult::new(question.id, selected, is_correct);

        self.results.push(result.clone());
        self.phase = AnswerPhase::Submitted;

        log::debug!(
            "Question {} submitted ({}/{}), correct: {}",
            question.id,
            self.current_index + 1,
            self.total,
            is_correct
        );

        Ok(result)
    }

    pub fn advance(&mut self) -> AppResult<Advance> {
        if !self.is_submitted() {
            return Err(AppError::InvalidState(
                "The current question must be submitted before moving on".to_string(),
            ));
        }

        if self.is_last() {
            return Ok(Advance::Finished(std::mem::take(&mut self.results)));
        }

        self.current_index += 1;
        self.selection.clear();
        self.phase = AnswerPhase::Unanswered;
        Ok(Advance::Next(self.current_index))
    }
}

/// Strict set equality on sorted sequences. Subsets and supersets of the
/// correct answer score nothing; correct indices that can never be selected
/// (negative, out of range, repeated) never match.
pub fn is_exact_match(selected: &[u32], correct: &[i32]) -> bool {
    let mut selected: Vec<i64> = selected.iter().map(|&i| i64::from(i)).collect();
    let mut correct: Vec<i64> = correct.iter().map(|&i| i64::from(i)).collect();
    selected.sort_unstable();
    correct.sort_unstable();
    selected == correct
}
