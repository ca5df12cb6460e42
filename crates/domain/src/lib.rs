//! Ludopack domain: activity model, config extraction, and game rules.
//!
//! Everything here is pure and deterministic under an injected
//! [`random::RandomSource`]; rendering and code generation live in the
//! engine crate.

pub mod activity;
pub mod config;
pub mod error;
pub mod games;
pub mod question;
pub mod random;
pub mod render_context;

pub use activity::{GameType, GamificationActivity};
pub use config::{BattleshipsConfig, BotDifficulty, QuizUnoConfig};
pub use error::DomainError;
pub use question::{bank_or_placeholder, QuizQuestion};
pub use random::{shuffle, RandomSource, StepRandom};
pub use render_context::{js_identifier_suffix, RenderContext, TRACKING_CLASS};
