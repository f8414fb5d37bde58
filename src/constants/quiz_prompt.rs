use crate::models::domain::{CorrectAnswersMode, QuizConfiguration};

pub const QUIZ_SYSTEM_PROMPT: &str = "Acționează ca un profesor de drept din România care pregătește candidați pentru examenele de Barou și INM.

### Obiective:

1. **Exactitate juridică:** Fiecare grilă se bazează pe textele în vigoare ale noilor Coduri (Codul Civil, Codul de Procedură Civilă, Codul Penal, Codul de Procedură Penală).
2. **Format fix:** Fiecare grilă are exact 3 variante de răspuns (A, B, C).
3. **Explicații complete:** Pentru fiecare grilă citează articolul relevant și explică raționamentul pentru fiecare variantă.
4. **Ieșire structurată:** Răspunde doar cu JSON valid, conform schemei primite, fără text suplimentar.";

/// Rule describing how many options may be correct under `mode`.
pub fn correct_answers_rule(mode: CorrectAnswersMode) -> &'static str {
    match mode {
        CorrectAnswersMode::Single => {
            "Fiecare întrebare trebuie să aibă EXACT O SINGURĂ variantă corectă din cele 3."
        }
        CorrectAnswersMode::OneOrTwo => {
            "Fiecare întrebare trebuie să aibă FIE UNA, FIE DOUĂ variante corecte din cele 3 (NICIODATĂ toate 3 și NICIODATĂ niciuna)."
        }
        CorrectAnswersMode::Any => {
            "Fiecare întrebare poate avea UNA, DOUĂ sau TOATE CELE TREI variante corecte."
        }
    }
}

pub fn build_quiz_prompt(config: &QuizConfiguration) -> String {
    format!(
        "Generează {count} grile din: {codes}.
Tematică: \"{topic}\". Dificultate: {difficulty}. Tip: {style}.

REGULI DE AUR:
1. EXACT 3 VARIANTE: Fiecare grilă trebuie să aibă exact 3 opțiuni (A, B, C).
2. LOGICĂ RĂSPUNSURI: {rule}
3. STIL: Folosește limbajul din noile Coduri. Dacă ai ales \"Speță\", creează un scenariu juridic riguros.
4. EXPLICAȚIE: Obligatoriu citează articolul din lege și explică raționamentul pentru fiecare variantă.
5. INDICI: correctIndices conține pozițiile variantelor corecte, numărate de la 0.

Returnează JSON valid.",
        count = config.count,
        codes = config.code_labels().join(", "),
        topic = config.topic,
        difficulty = config.difficulty.label(),
        style = config.question_style.label(),
        rule = correct_answers_rule(config.correct_mode),
    )
}
