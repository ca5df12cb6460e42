//! Authored activity model.
//!
//! A `GamificationActivity` is produced by the authoring UI and is
//! immutable from the engine's point of view once rendering starts.
//! Its `config` is a loosely-typed bag; the `config` module derives
//! strict per-game records from it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The closed set of mini-game types an activity can carry.
///
/// Only `Battleships` and `QuizUno` have engines in this workspace;
/// the remaining types are part of the authored vocabulary and must
/// round-trip through serialization unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    Battleships,
    QuizUno,
    MemoryMatch,
    WordSearch,
    Millionaire,
    TheChase,
    NeonDefender,
    KnowledgeTetris,
}

impl GameType {
    /// Stable identifier used in registry keys and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Battleships => "battleships",
            Self::QuizUno => "quiz_uno",
            Self::MemoryMatch => "memory_match",
            Self::WordSearch => "word_search",
            Self::Millionaire => "millionaire",
            Self::TheChase => "the_chase",
            Self::NeonDefender => "neon_defender",
            Self::KnowledgeTetris => "knowledge_tetris",
        }
    }
}

/// One authored gamification activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamificationActivity {
    id: String,
    game_type: GameType,
    /// Loosely-typed per-game configuration; optional fields per game.
    /// Never mutated after extraction.
    #[serde(default)]
    config: Value,
}

impl GamificationActivity {
    pub fn new(id: impl Into<String>, game_type: GameType, config: Value) -> Self {
        Self {
            id: id.into(),
            game_type,
            config,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    pub fn config(&self) -> &Value {
        &self.config
    }

    /// Fetch a config field by key, `None` when config is not an object
    /// or the key is absent.
    pub fn config_field(&self, key: &str) -> Option<&Value> {
        self.config.as_object().and_then(|map| map.get(key))
    }
}
