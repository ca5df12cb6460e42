//! Visual theme registry.
//!
//! Resolves `(game type, theme id)` to a skin. Theme CSS is opaque to
//! the engine; the `class_prefix` is the sole namespace boundary
//! between the CSS of different games and themes rendered on the same
//! exported page.

mod battleships;
mod quiz_uno;

use std::collections::HashMap;

use ludopack_domain::GameType;

pub use battleships::{battleships_themes, BATTLESHIPS_DEFAULT_THEME};
pub use quiz_uno::{quiz_uno_themes, QUIZ_UNO_DEFAULT_THEME};

/// A named visual skin for one game type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTheme {
    id: String,
    name: String,
    /// Prefix for every CSS class, DOM id fragment, and global function
    /// name belonging to this theme/game pairing.
    class_prefix: String,
    css: String,
}

impl GameTheme {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        class_prefix: impl Into<String>,
        css: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            class_prefix: class_prefix.into(),
            css: css.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class_prefix(&self) -> &str {
        &self.class_prefix
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}

/// Registry of available themes per game type. The first theme
/// registered for a game type is its default.
pub struct ThemeRegistry {
    themes: HashMap<GameType, Vec<GameTheme>>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeRegistry {
    /// Create a registry with all built-in theme sets.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register_game_themes(GameType::Battleships, battleships_themes());
        registry.register_game_themes(GameType::QuizUno, quiz_uno_themes());
        registry
    }

    /// Create an empty registry without built-in themes.
    pub fn empty() -> Self {
        Self {
            themes: HashMap::new(),
        }
    }

    /// Register the theme set for a game type, replacing any previous
    /// set. The first entry becomes the default.
    pub fn register_game_themes(&mut self, game_type: GameType, themes: Vec<GameTheme>) {
        self.themes.insert(game_type, themes);
    }

    /// Resolve a theme. `None` or an unknown id falls back to the
    /// game's default; the result is `None` only when the game type
    /// itself was never registered, which is a build-time configuration
    /// error rather than a runtime one.
    pub fn get_game_theme(&self, game_type: GameType, theme_id: Option<&str>) -> Option<&GameTheme> {
        let themes = self.themes.get(&game_type)?;
        if let Some(id) = theme_id {
            if !id.is_empty() {
                if let Some(theme) = themes.iter().find(|t| t.id == id) {
                    return Some(theme);
                }
                tracing::warn!(
                    game_type = game_type.as_str(),
                    theme_id = id,
                    "unknown theme id, falling back to default"
                );
            }
        }
        themes.first()
    }

    /// List `(id, name)` for every theme of a game type.
    pub fn get_available_themes(&self, game_type: GameType) -> Vec<(&str, &str)> {
        self.themes
            .get(&game_type)
            .map(|themes| {
                themes
                    .iter()
                    .map(|t| (t.id.as_str(), t.name.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_theme(&self, game_type: GameType, theme_id: &str) -> bool {
        self.themes
            .get(&game_type)
            .map(|themes| themes.iter().any(|t| t.id == theme_id))
            .unwrap_or(false)
    }
}
