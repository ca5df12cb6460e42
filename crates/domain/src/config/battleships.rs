//! Battleships configuration extraction.

use serde::{Deserialize, Serialize};

use crate::activity::GamificationActivity;
use crate::question::QuizQuestion;

use super::{bool_field, questions_field, usize_field};

const DEFAULT_GRID_SIZE: usize = 8;
const DEFAULT_SHIP_COUNT: usize = 4;
const MIN_GRID_SIZE: usize = 5;
const MAX_GRID_SIZE: usize = 12;
const MAX_SHIP_COUNT: usize = 8;
const LARGEST_SHIP: usize = 5;
const SMALLEST_SHIP: usize = 2;

/// Typed Battleships configuration.
///
/// Invariants: `ship_sizes.len() == ship_count`; no ship size exceeds
/// `grid_size`; re-extraction from the same activity is byte-identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleshipsConfig {
    pub questions: Vec<QuizQuestion>,
    pub required: bool,
    pub grid_size: usize,
    pub ship_count: usize,
    pub ship_sizes: Vec<usize>,
}

impl BattleshipsConfig {
    /// Extract from an authored activity. Never fails; defaults:
    /// `gridSize` 8, `shipCount` 4, `questions` empty, `required` false.
    pub fn from_activity(activity: &GamificationActivity) -> Self {
        let grid_size =
            usize_field(activity, "gridSize", DEFAULT_GRID_SIZE).clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        let ship_count =
            usize_field(activity, "shipCount", DEFAULT_SHIP_COUNT).clamp(1, MAX_SHIP_COUNT);

        Self {
            questions: questions_field(activity),
            required: bool_field(activity, "required", false),
            grid_size,
            ship_count,
            ship_sizes: derive_ship_sizes(ship_count, grid_size),
        }
    }
}

/// Ship sizes decrease from 5 down to a floor of 2 as count grows,
/// clamped so no ship outgrows the grid.
fn derive_ship_sizes(ship_count: usize, grid_size: usize) -> Vec<usize> {
    (0..ship_count)
        .map(|i| {
            LARGEST_SHIP
                .saturating_sub(i)
                .max(SMALLEST_SHIP)
                .min(grid_size)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::GameType;
    use serde_json::json;

    fn activity(config: serde_json::Value) -> GamificationActivity {
        GamificationActivity::new("bs-1", GameType::Battleships, config)
    }

    #[test]
    fn defaults_apply_on_empty_config() {
        let config = BattleshipsConfig::from_activity(&activity(json!({})));
        assert_eq!(config.grid_size, 8);
        assert_eq!(config.ship_count, 4);
        assert_eq!(config.ship_sizes, vec![5, 4, 3, 2]);
        assert!(config.questions.is_empty());
        assert!(!config.required);
    }

    #[test]
    fn ship_sizes_floor_at_two() {
        let config = BattleshipsConfig::from_activity(&activity(json!({"shipCount": 6})));
        assert_eq!(config.ship_sizes, vec![5, 4, 3, 2, 2, 2]);
    }

    #[test]
    fn ship_sizes_never_exceed_grid() {
        let config = BattleshipsConfig::from_activity(
            &activity(json!({"gridSize": 5, "shipCount": 3})),
        );
        assert!(config.ship_sizes.iter().all(|&s| s <= config.grid_size));
        assert_eq!(config.ship_sizes.len(), config.ship_count);
    }

    #[test]
    fn malformed_fields_fall_back_to_defaults() {
        let config = BattleshipsConfig::from_activity(
            &activity(json!({"gridSize": "huge", "shipCount": null, "questions": 7})),
        );
        assert_eq!(config.grid_size, 8);
        assert_eq!(config.ship_count, 4);
        assert!(config.questions.is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let activity = activity(json!({"gridSize": 10, "shipCount": 5, "required": true}));
        let first = BattleshipsConfig::from_activity(&activity);
        let second = BattleshipsConfig::from_activity(&activity);
        assert_eq!(first, second);
    }

    #[test]
    fn questions_skip_malformed_entries() {
        let config = BattleshipsConfig::from_activity(&activity(json!({
            "questions": [
                {"question": "Q1", "answers": ["a", "b"], "correctIndex": 1},
                "not a question",
            ]
        })));
        assert_eq!(config.questions.len(), 1);
        assert_eq!(config.questions[0].correct_index, 1);
    }
}
