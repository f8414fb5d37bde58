#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{
        CorrectAnswersMode, Difficulty, LegalCode, Question, QuestionStyle, QuizConfiguration,
    };

    /// Configuration asking for `count` single-answer questions
    pub fn sample_configuration(count: u32) -> QuizConfiguration {
        QuizConfiguration {
            codes: vec![LegalCode::Civil],
            topic: "Rezoluțiunea contractului".to_string(),
            difficulty: Difficulty::Medium,
            question_style: QuestionStyle::CaseStudy,
            count,
            correct_mode: CorrectAnswersMode::Single,
        }
    }

    /// Questions 1..=count; question n has option (n - 1) % 3 correct
    pub fn sample_questions(count: u32) -> Vec<Question> {
        (1..=count)
            .map(|id| {
                Question::new(
                    id,
                    format!("Speța {}: care este soluția corectă?", id),
                    vec![
                        "Nulitate absolută".to_string(),
                        "Nulitate relativă".to_string(),
                        "Inopozabilitate".to_string(),
                    ],
                    vec![((id - 1) % 3) as i32],
                    format!("Explicația pentru speța {} (art. 1179 C. civ.)", id),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sample_questions() {
        let questions = sample_questions(4);
        assert_eq!(questions.len(), 4);
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[0].correct_indices, vec![0]);
        assert_eq!(questions[3].correct_indices, vec![0]);
        assert!(questions.iter().all(|q| q.options.len() == 3));
    }

    #[test]
    fn test_fixtures_sample_configuration() {
        let config = sample_configuration(7);
        assert_eq!(config.count, 7);
        assert_eq!(config.codes.len(), 1);
    }
}
