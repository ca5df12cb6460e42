//! Quiz question bank types.

use serde::{Deserialize, Serialize};

/// One authored multiple-choice question.
///
/// Deserialization is lenient: missing fields default so a partially
/// authored question still renders instead of failing the whole bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answers: Vec<String>,
    #[serde(default)]
    pub correct_index: usize,
    #[serde(default)]
    pub explanation: String,
}

impl QuizQuestion {
    pub fn new(
        question: impl Into<String>,
        answers: Vec<String>,
        correct_index: usize,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answers,
            correct_index,
            explanation: explanation.into(),
        }
    }

    /// The built-in placeholder substituted when an author ships an
    /// empty question bank. Games must always be playable.
    pub fn placeholder() -> Self {
        Self::new(
            "Which option is correct?",
            vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
            ],
            0,
            "This activity has no authored questions yet.",
        )
    }
}

/// Return the authored bank, or a single placeholder when it is empty.
pub fn bank_or_placeholder(questions: &[QuizQuestion]) -> Vec<QuizQuestion> {
    if questions.is_empty() {
        vec![QuizQuestion::placeholder()]
    } else {
        questions.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_question_deserializes_with_defaults() {
        let q: QuizQuestion = serde_json::from_value(json!({"question": "Why?"})).unwrap();
        assert_eq!(q.question, "Why?");
        assert!(q.answers.is_empty());
        assert_eq!(q.correct_index, 0);
    }

    #[test]
    fn empty_bank_substitutes_placeholder() {
        let bank = bank_or_placeholder(&[]);
        assert_eq!(bank.len(), 1);
        assert!(!bank[0].answers.is_empty());
    }

    #[test]
    fn non_empty_bank_passes_through() {
        let authored = vec![QuizQuestion::new("Q", vec!["A".into(), "B".into()], 1, "")];
        assert_eq!(bank_or_placeholder(&authored), authored);
    }
}
