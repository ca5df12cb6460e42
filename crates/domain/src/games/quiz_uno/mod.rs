//! Uno-style card duel with quiz-gated plays.

mod bot;
mod deck;
mod game;

pub use bot::order_candidates;
pub use deck::{build_deck, Card, CardColor, CardRank, COLORS};
pub use game::{
    BotPlay, EndReport, GateKind, PlayOutcome, PlayedCard, Side, UnoGame, BONUS_GATE_PERCENT,
};
