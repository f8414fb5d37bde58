use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::Question;

/// One question as returned by the generation endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub text: String,
    /// Exactly three answer options.
    pub options: Vec<String>,
    /// Indices of the correct options (0, 1 or 2).
    pub correct_indices: Vec<i32>,
    /// Legal reasoning, citing the relevant article.
    pub explanation: String,
}

/// Envelope requested from the endpoint; structured output needs an object
/// at the top level.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedQuiz {
    pub questions: Vec<GeneratedQuestion>,
}

/// Some models ignore the envelope and answer with the bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GeneratedPayload {
    Wrapped(GeneratedQuiz),
    Bare(Vec<GeneratedQuestion>),
}

impl GeneratedPayload {
    pub fn into_questions(self) -> Vec<GeneratedQuestion> {
        match self {
            GeneratedPayload::Wrapped(quiz) => quiz.questions,
            GeneratedPayload::Bare(questions) => questions,
        }
    }
}

impl GeneratedQuestion {
    /// Converts into a domain question with the given sequential id.
    pub fn into_question(self, id: u32) -> Question {
        Question::new(
            id,
            self.text,
            self.options,
            self.correct_indices,
            self.explanation,
        )
    }
}

/// Subset of a chat completion response that the generator reads.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionEnvelope {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    pub content: Option<String>,
}

impl ChatCompletionEnvelope {
    pub fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_accepts_wrapped_and_bare_forms() {
        let item = r#"{"text":"T","options":["a","b","c"],"correctIndices":[1],"explanation":"E"}"#;

        let wrapped: GeneratedPayload =
            serde_json::from_str(&format!(r#"{{"questions":[{}]}}"#, item)).expect("wrapped");
        let bare: GeneratedPayload = serde_json::from_str(&format!("[{}]", item)).expect("bare");

        assert_eq!(wrapped.into_questions(), bare.into_questions());
    }

    #[test]
    fn payload_rejects_missing_fields() {
        let json = r#"[{"text":"T","options":["a","b","c"]}]"#;
        assert!(serde_json::from_str::<GeneratedPayload>(json).is_err());
    }

    #[test]
    fn envelope_skips_empty_content() {
        let json = r#"{"choices":[{"message":{"content":"  "}}]}"#;
        let envelope: ChatCompletionEnvelope = serde_json::from_str(json).expect("envelope");
        assert!(envelope.into_content().is_none());

        let json = r#"{"choices":[]}"#;
        let envelope: ChatCompletionEnvelope = serde_json::from_str(json).expect("envelope");
        assert!(envelope.into_content().is_none());
    }

    #[test]
    fn schema_describes_camel_case_fields() {
        let schema = schemars::schema_for!(GeneratedQuiz);
        let json = serde_json::to_string(&schema).expect("schema should serialize");

        assert!(json.contains("correctIndices"));
        assert!(json.contains("explanation"));
    }
}
