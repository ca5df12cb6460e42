//! Game rule implementations.
//!
//! Each game exposes pure state structs mutated through narrow
//! operations; all randomness arrives via [`crate::random::RandomSource`].

pub mod battleships;
pub mod quiz_uno;
