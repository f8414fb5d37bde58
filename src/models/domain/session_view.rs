use async_graphql::Enum;
use serde::{Deserialize, Serialize};

/// Which part of the session is live. Exactly one at a time.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Enum, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionView {
    Setup,
    Loading,
    Quiz,
    Results,
}

impl std::fmt::Display for SessionView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionView::Setup => write!(f, "SETUP"),
            SessionView::Loading => write!(f, "LOADING"),
            SessionView::Quiz => write!(f, "QUIZ"),
            SessionView::Results => write!(f, "RESULTS"),
        }
    }
}

/// Sub-state of the question currently on screen.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Enum, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum AnswerPhase {
    Unanswered,
    Submitted,
}
