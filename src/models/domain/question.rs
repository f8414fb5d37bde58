use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

pub const OPTIONS_PER_QUESTION: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct Question {
    pub id: u32, // 1-based, assigned in receipt order
    pub text: String,
    pub options: Vec<String>, // always OPTIONS_PER_QUESTION entries
    pub correct_indices: Vec<i32>, // as received, not checked against the mode
    pub explanation: String,
}

impl Question {
    /// Builds a question, forcing the option list to exactly three entries.
    /// Extra options are dropped, missing ones are left blank.
    pub fn new(
        id: u32,
        text: impl Into<String>,
        options: Vec<String>,
        correct_indices: Vec<i32>,
        explanation: impl Into<String>,
    ) -> Self {
        let mut options = options;
        options.truncate(OPTIONS_PER_QUESTION);
        options.resize(OPTIONS_PER_QUESTION, String::new());

        Question {
            id,
            text: text.into(),
            options,
            correct_indices,
            explanation: explanation.into(),
        }
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn is_correct_option(&self, index: usize) -> bool {
        self.correct_indices
            .iter()
            .any(|&c| usize::try_from(c).map_or(false, |c| c == index))
    }
}

/// Letter shown next to an option: 0 -> "A", 1 -> "B", ...
pub fn option_letter(index: usize) -> String {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .map(|b| char::from(b).to_string())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Varianta {}", i)).collect()
    }

    #[test]
    fn question_truncates_extra_options() {
        let question = Question::new(1, "Intrebare", options(5), vec![0], "Explicatie");

        assert_eq!(question.option_count(), OPTIONS_PER_QUESTION);
        assert_eq!(question.options[2], "Varianta 2");
    }

    #[test]
    fn question_pads_missing_options() {
        let question = Question::new(1, "Intrebare", options(2), vec![1], "Explicatie");

        assert_eq!(question.option_count(), OPTIONS_PER_QUESTION);
        assert_eq!(question.options[2], "");
    }

    #[test]
    fn out_of_range_correct_index_matches_no_option() {
        let question = Question::new(1, "Intrebare", options(3), vec![-1, 7], "Explicatie");

        assert!((0..3).all(|i| !question.is_correct_option(i)));
        assert_eq!(question.correct_indices, vec![-1, 7]);
    }

    #[test]
    fn option_letters() {
        assert_eq!(option_letter(0), "A");
        assert_eq!(option_letter(2), "C");
    }
}
