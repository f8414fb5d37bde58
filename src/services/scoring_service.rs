use crate::models::domain::{AnswerResult, Question};
use crate::models::dto::response::{GradeBand, QuestionReview, Score};

pub struct ScoringService;

impl ScoringService {
    /// Counts correct results against the number of questions asked.
    /// An empty session scores 0%.
    pub fn score(questions: &[Question], results: &[AnswerResult]) -> Score {
        let correct_count = results.iter().filter(|r| r.is_correct).count() as u32;
        let total = questions.len() as u32;

        let percentage = if total == 0 {
            0
        } else {
            (100.0 * f64::from(correct_count) / f64::from(total)).round() as u32
        };

        Score {
            correct_count,
            total,
            percentage,
            grade: GradeBand::from_percentage(percentage),
        }
    }

    /// Pairs every question, in order, with the result recorded for it.
    /// A question without a result is shown as unanswered and incorrect.
    pub fn review(questions: &[Question], results: &[AnswerResult]) -> Vec<QuestionReview> {
        questions
            .iter()
            .enumerate()
            .map(|(i, question)| {
                let position = i as u32 + 1;
                match results.iter().find(|r| r.question_id == question.id) {
                    Some(r) => {
                        QuestionReview::build(position, question, &r.selected_indices, r.is_correct)
                    }
                    None => QuestionReview::build(position, question, &[], false),
                }
            })
            .collect()
    }
}
