//! Strict per-game configuration records.
//!
//! Extraction is total: every field has a documented default, so a game
//! is always renderable even from an empty or malformed config bag.
//! Extraction never mutates the authored activity and is idempotent.

mod battleships;
mod quiz_uno;

pub use battleships::BattleshipsConfig;
pub use quiz_uno::{BotDifficulty, QuizUnoConfig};

use serde_json::Value;

use crate::activity::GamificationActivity;
use crate::question::QuizQuestion;

/// Read a numeric config field, falling back to `default` when absent
/// or not a number.
pub(crate) fn usize_field(activity: &GamificationActivity, key: &str, default: usize) -> usize {
    activity
        .config_field(key)
        .and_then(Value::as_u64)
        .map(|n| n as usize)
        .unwrap_or(default)
}

/// Read a boolean config field, defaulting to `default`.
pub(crate) fn bool_field(activity: &GamificationActivity, key: &str, default: bool) -> bool {
    activity
        .config_field(key)
        .and_then(Value::as_bool)
        .unwrap_or(default)
}

/// Read the question bank; entries that fail to deserialize are skipped
/// rather than poisoning the bank.
pub(crate) fn questions_field(activity: &GamificationActivity) -> Vec<QuizQuestion> {
    activity
        .config_field("questions")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}
