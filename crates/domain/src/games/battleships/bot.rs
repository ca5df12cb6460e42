//! Hunt-and-target gunner for the enemy turn.
//!
//! Two modes: random search ("hunt") until a hit, then prioritized
//! search of the hit's orthogonal neighbors ("target") via a candidate
//! stack. No probability-density targeting; the stack alone produces
//! the classic cluster-around-a-hit behavior.

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

use super::fleet::{Fleet, ShotOutcome};

/// Random draws attempted in hunt mode before falling back to a linear
/// scan, so a nearly-exhausted board can never loop forever.
const HUNT_RETRY_CAP: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotGunner {
    /// Candidate cells queued by earlier hits; popped before hunting.
    candidates: Vec<(usize, usize)>,
}

impl BotGunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the next cell to fire at, or `None` when every cell on the
    /// board has already been resolved.
    pub fn choose_target(
        &mut self,
        board: &Fleet,
        rng: &mut dyn RandomSource,
    ) -> Option<(usize, usize)> {
        // Target mode: drain stale candidates that were hit in the
        // meantime (a cluster shot can resolve a queued cell).
        while let Some((row, col)) = self.candidates.pop() {
            if !board.is_hit(row, col) {
                return Some((row, col));
            }
        }

        // Hunt mode: bounded random draws.
        let max = board.grid().size().saturating_sub(1) as i32;
        for _ in 0..HUNT_RETRY_CAP {
            let row = rng.gen_range(0, max) as usize;
            let col = rng.gen_range(0, max) as usize;
            if !board.is_hit(row, col) {
                return Some((row, col));
            }
        }

        // Fallback scan keeps the turn total on a nearly-full board.
        for row in 0..board.grid().size() {
            for col in 0..board.grid().size() {
                if !board.is_hit(row, col) {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Record a shot result. A hit that does not sink queues every
    /// in-bounds, unhit orthogonal neighbor.
    pub fn note_result(&mut self, board: &Fleet, row: usize, col: usize, outcome: ShotOutcome) {
        if let ShotOutcome::Hit { sunk: false, .. } = outcome {
            for (r, c) in board.grid().neighbors(row, col) {
                if !board.is_hit(r, c) && !self.candidates.contains(&(r, c)) {
                    self.candidates.push((r, c));
                }
            }
        }
    }

    pub fn candidates(&self) -> &[(usize, usize)] {
        &self.candidates
    }
}
