//! Production randomness implementation.

use ludopack_domain::RandomSource;

/// System random - uses real randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for SystemRandom {
    fn gen_range(&mut self, min: i32, max: i32) -> i32 {
        use rand::Rng;
        rand::thread_rng().gen_range(min..=max)
    }
}
