pub mod answer_result;
pub mod question;
pub mod quiz_config;
pub mod session_view;
pub use answer_result::AnswerResult;
pub use question::Question;
pub use quiz_config::{
    CorrectAnswersMode, Difficulty, LegalCode, QuestionStyle, QuizConfiguration, SubjectSelection,
};
pub use session_view::{AnswerPhase, SessionView};
