use async_graphql::{Enum, SimpleObject};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOPIC: &str = "General / Toată materia";
pub const MIN_QUESTION_COUNT: u32 = 1;
pub const MAX_QUESTION_COUNT: u32 = 50;
pub const DEFAULT_QUESTION_COUNT: u32 = 10;

/// Legal code a session draws its questions from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Enum, Copy)]
pub enum LegalCode {
    Civil,
    CivilProcedure,
    Criminal,
    CriminalProcedure,
}

impl LegalCode {
    pub const ALL: [LegalCode; 4] = [
        LegalCode::Civil,
        LegalCode::CivilProcedure,
        LegalCode::Criminal,
        LegalCode::CriminalProcedure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LegalCode::Civil => "Codul Civil",
            LegalCode::CivilProcedure => "Codul de Procedură Civilă",
            LegalCode::Criminal => "Codul Penal",
            LegalCode::CriminalProcedure => "Codul de Procedură Penală",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Enum, Copy)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Ușor (Concepte de bază)",
            Difficulty::Medium => "Mediu (Spețe simple)",
            Difficulty::Hard => "Dificil (Stil INM/Barou - Spețe complexe)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Enum, Copy)]
pub enum QuestionStyle {
    Theory,
    CaseStudy,
    Mixed,
}

impl QuestionStyle {
    pub const ALL: [QuestionStyle; 3] = [
        QuestionStyle::Theory,
        QuestionStyle::CaseStudy,
        QuestionStyle::Mixed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuestionStyle::Theory => "Teoretic",
            QuestionStyle::CaseStudy => "Speță (Caz practic)",
            QuestionStyle::Mixed => "Mixt",
        }
    }
}

/// How many of the three options the generator may mark as correct.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Enum, Copy)]
pub enum CorrectAnswersMode {
    Single,   // exactly one
    OneOrTwo, // one or two, never none or all
    Any,      // one, two or three
}

impl CorrectAnswersMode {
    pub const ALL: [CorrectAnswersMode; 3] = [
        CorrectAnswersMode::Single,
        CorrectAnswersMode::OneOrTwo,
        CorrectAnswersMode::Any,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CorrectAnswersMode::Single => "O singură variantă corectă",
            CorrectAnswersMode::OneOrTwo => "Una sau două variante corecte",
            CorrectAnswersMode::Any => "Oricâte pot fi corecte (1, 2 sau 3)",
        }
    }

    /// Inclusive bounds on the number of correct options. Informational only:
    /// generated questions are not re-validated against them.
    pub fn allowed_correct_counts(&self) -> (usize, usize) {
        match self {
            CorrectAnswersMode::Single => (1, 1),
            CorrectAnswersMode::OneOrTwo => (1, 2),
            CorrectAnswersMode::Any => (1, 3),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct QuizConfiguration {
    pub codes: Vec<LegalCode>,
    pub topic: String,
    pub difficulty: Difficulty,
    pub question_style: QuestionStyle,
    pub count: u32,
    pub correct_mode: CorrectAnswersMode,
}

impl QuizConfiguration {
    pub fn code_labels(&self) -> Vec<&'static str> {
        self.codes.iter().map(LegalCode::label).collect()
    }
}

impl Default for QuizConfiguration {
    fn default() -> Self {
        QuizConfiguration {
            codes: vec![LegalCode::Civil],
            topic: DEFAULT_TOPIC.to_string(),
            difficulty: Difficulty::Medium,
            question_style: QuestionStyle::Mixed,
            count: DEFAULT_QUESTION_COUNT,
            correct_mode: CorrectAnswersMode::OneOrTwo,
        }
    }
}

/// Applies the default topic to an empty or blank one.
pub fn normalize_topic(topic: Option<&str>) -> String {
    match topic.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => DEFAULT_TOPIC.to_string(),
    }
}

/// Subject-area picker state. Never empty: removing the last selected code is
/// ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectSelection {
    codes: Vec<LegalCode>,
}

impl SubjectSelection {
    pub fn new(initial: LegalCode) -> Self {
        Self {
            codes: vec![initial],
        }
    }

    /// Builds a selection from a submitted list, dropping repeats and keeping
    /// first-seen order. `None` for an empty list.
    pub fn from_codes(codes: &[LegalCode]) -> Option<Self> {
        let (first, rest) = codes.split_first()?;
        let mut selection = Self::new(*first);
        for code in rest {
            if !selection.contains(*code) {
                selection.codes.push(*code);
            }
        }
        Some(selection)
    }

    /// Returns false when the toggle was refused.
    pub fn toggle(&mut self, code: LegalCode) -> bool {
        match self.codes.iter().position(|c| *c == code) {
            Some(_) if self.codes.len() == 1 => false,
            Some(pos) => {
                self.codes.remove(pos);
                true
            }
            None => {
                self.codes.push(code);
                true
            }
        }
    }

    pub fn contains(&self, code: LegalCode) -> bool {
        self.codes.contains(&code)
    }

    pub fn into_codes(self) -> Vec<LegalCode> {
        self.codes
    }
}
