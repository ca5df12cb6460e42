//! Quiz Uno configuration extraction.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::activity::GamificationActivity;
use crate::question::QuizQuestion;

use super::{bool_field, questions_field, usize_field};

const DEFAULT_PASS_MARK: u8 = 70;
const DEFAULT_HAND_SIZE: usize = 7;
const MAX_HAND_SIZE: usize = 12;

/// How the bot orders its legal plays. Difficulty is a single swappable
/// candidate-ordering policy, not a separate algorithm per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BotDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl BotDifficulty {
    fn parse(value: &str) -> Self {
        match value {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            // Unknown strings fall back to the default.
            _ => Self::Medium,
        }
    }
}

/// Typed Quiz Uno configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizUnoConfig {
    pub questions: Vec<QuizQuestion>,
    pub required: bool,
    /// Percentage of gated quizzes that must be answered correctly for
    /// the play-through to count as "passed".
    pub pass_mark: u8,
    pub hand_size: usize,
    pub difficulty: BotDifficulty,
}

impl QuizUnoConfig {
    /// Extract from an authored activity. Never fails; defaults:
    /// `passMark` 70, `handSize` 7, `difficulty` medium, `questions`
    /// empty, `required` false.
    pub fn from_activity(activity: &GamificationActivity) -> Self {
        let pass_mark = activity
            .config_field("passMark")
            .and_then(Value::as_u64)
            .map(|n| n.min(100) as u8)
            .unwrap_or(DEFAULT_PASS_MARK);
        let difficulty = activity
            .config_field("difficulty")
            .and_then(Value::as_str)
            .map(BotDifficulty::parse)
            .unwrap_or_default();

        Self {
            questions: questions_field(activity),
            required: bool_field(activity, "required", false),
            pass_mark,
            hand_size: usize_field(activity, "handSize", DEFAULT_HAND_SIZE).clamp(3, MAX_HAND_SIZE),
            difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::GameType;
    use serde_json::json;

    fn activity(config: serde_json::Value) -> GamificationActivity {
        GamificationActivity::new("uno-1", GameType::QuizUno, config)
    }

    #[test]
    fn defaults_apply_on_empty_config() {
        let config = QuizUnoConfig::from_activity(&activity(json!({})));
        assert_eq!(config.pass_mark, 70);
        assert_eq!(config.hand_size, 7);
        assert_eq!(config.difficulty, BotDifficulty::Medium);
    }

    #[test]
    fn unknown_difficulty_falls_back_to_medium() {
        let config =
            QuizUnoConfig::from_activity(&activity(json!({"difficulty": "nightmare"})));
        assert_eq!(config.difficulty, BotDifficulty::Medium);
    }

    #[test]
    fn pass_mark_caps_at_one_hundred() {
        let config = QuizUnoConfig::from_activity(&activity(json!({"passMark": 250})));
        assert_eq!(config.pass_mark, 100);
    }

    #[test]
    fn hand_size_clamps_to_sane_range() {
        let config = QuizUnoConfig::from_activity(&activity(json!({"handSize": 1})));
        assert_eq!(config.hand_size, 3);
    }
}
