//! Ludopack engine: themes, script generation, and bundle assembly.
//!
//! The facade turns an authored [`GamificationActivity`] into one
//! self-contained HTML+CSS+JS string per call. Bundles on the same
//! exported page never collide: every DOM id, CSS scope class, and
//! window-exposed function is namespaced per instance.

pub mod battleships;
pub mod embed;
pub mod error;
pub mod quiz_uno;
pub mod random;
pub mod themes;

use ludopack_domain::{BattleshipsConfig, GameType, GamificationActivity, QuizUnoConfig, RenderContext};

pub use error::RenderError;
pub use random::SystemRandom;
pub use themes::{GameTheme, ThemeRegistry};

/// Render an activity with its game type's default theme.
pub fn render_activity(activity: &GamificationActivity) -> Result<String, RenderError> {
    render_activity_with_theme(activity, None)
}

/// Render an activity, requesting a theme by id. Unknown or empty ids
/// fall back to the game's default theme rather than failing.
pub fn render_activity_with_theme(
    activity: &GamificationActivity,
    theme_id: Option<&str>,
) -> Result<String, RenderError> {
    tracing::debug!(
        activity_id = activity.id(),
        game_type = activity.game_type().as_str(),
        "rendering activity bundle"
    );
    match activity.game_type() {
        GameType::Battleships => render_battleships_with_theme(activity, theme_id),
        GameType::QuizUno => render_quiz_uno_with_theme(activity, theme_id),
        other => Err(RenderError::UnsupportedGameType(other)),
    }
}

/// Render a Battleships activity with its default theme.
pub fn render_battleships(activity: &GamificationActivity) -> Result<String, RenderError> {
    render_battleships_with_theme(activity, None)
}

/// Render a Battleships activity with a requested theme id.
pub fn render_battleships_with_theme(
    activity: &GamificationActivity,
    theme_id: Option<&str>,
) -> Result<String, RenderError> {
    let config = BattleshipsConfig::from_activity(activity);
    let context = RenderContext::new(activity, config.required);
    let registry = ThemeRegistry::builtin();
    let theme = registry
        .get_game_theme(GameType::Battleships, theme_id)
        .ok_or(RenderError::UnregisteredGameType(GameType::Battleships))?;
    Ok(battleships::render(&context, &config, theme))
}

/// Render a Quiz Uno activity with its default theme.
pub fn render_quiz_uno(activity: &GamificationActivity) -> Result<String, RenderError> {
    render_quiz_uno_with_theme(activity, None)
}

/// Render a Quiz Uno activity with a requested theme id.
pub fn render_quiz_uno_with_theme(
    activity: &GamificationActivity,
    theme_id: Option<&str>,
) -> Result<String, RenderError> {
    let config = QuizUnoConfig::from_activity(activity);
    let context = RenderContext::new(activity, config.required);
    let registry = ThemeRegistry::builtin();
    let theme = registry
        .get_game_theme(GameType::QuizUno, theme_id)
        .ok_or(RenderError::UnregisteredGameType(GameType::QuizUno))?;
    Ok(quiz_uno::render(&context, &config, theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unsupported_game_types_are_rejected() {
        let activity =
            GamificationActivity::new("mm-1", GameType::MemoryMatch, json!({}));
        assert_eq!(
            render_activity(&activity),
            Err(RenderError::UnsupportedGameType(GameType::MemoryMatch))
        );
    }

    #[test]
    fn both_engines_render_through_the_facade() {
        let bs = GamificationActivity::new("bs-1", GameType::Battleships, json!({}));
        let uno = GamificationActivity::new("uno-1", GameType::QuizUno, json!({}));
        assert!(render_activity(&bs).unwrap().contains("activity-bs-1"));
        assert!(render_activity(&uno).unwrap().contains("activity-uno-1"));
    }

    #[test]
    fn unknown_theme_id_falls_back_to_default() {
        let activity = GamificationActivity::new("bs-1", GameType::Battleships, json!({}));
        let fallback = render_activity_with_theme(&activity, Some("no-such-theme")).unwrap();
        let default = render_activity(&activity).unwrap();
        assert_eq!(fallback, default);
    }
}
