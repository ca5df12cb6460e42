//! Rendering error types.

use ludopack_domain::GameType;
use thiserror::Error;

/// Errors surfaced by the rendering facade.
///
/// These are build-time integration errors: the exporter must resolve
/// them during development, never show them to a learner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No theme set was ever registered for this game type.
    #[error("no themes registered for game type '{ty}'", ty = .0.as_str())]
    UnregisteredGameType(GameType),

    /// The game type has no engine in this workspace.
    #[error("game type '{ty}' has no engine implementation", ty = .0.as_str())]
    UnsupportedGameType(GameType),
}
