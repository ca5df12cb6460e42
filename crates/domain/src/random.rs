//! Randomness port for game rules.
//!
//! The domain crate has no `rand` dependency; shuffles, ship placement
//! and bot targeting all draw through this trait so tests can script
//! every outcome. The engine crate provides the `rand`-backed
//! implementation used in production.

/// Source of randomness injected into game rules.
pub trait RandomSource {
    /// Return a value in `min..=max`. Implementations may assume
    /// `min <= max`; callers never pass an empty range.
    fn gen_range(&mut self, min: i32, max: i32) -> i32;

    /// Return a value in `0..n` as a usize index. `n` must be > 0.
    fn index(&mut self, n: usize) -> usize {
        self.gen_range(0, n as i32 - 1) as usize
    }

    /// Return true with probability `percent` in 0..=100.
    fn chance(&mut self, percent: u8) -> bool {
        self.gen_range(1, 100) <= i32::from(percent)
    }
}

/// Fisher-Yates shuffle drawing indices from `rng`.
///
/// A free function rather than a trait method so the trait stays
/// object-safe.
pub fn shuffle<T>(rng: &mut dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.index(i + 1);
        items.swap(i, j);
    }
}

/// Scripted random for testing: yields values from a fixed sequence,
/// clamped into the requested range, then repeats the last value.
#[derive(Debug, Clone)]
pub struct StepRandom {
    values: Vec<i32>,
    cursor: usize,
}

impl StepRandom {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// A source that always yields `value` (clamped into range).
    pub fn fixed(value: i32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for StepRandom {
    fn gen_range(&mut self, min: i32, max: i32) -> i32 {
        let raw = self
            .values
            .get(self.cursor)
            .or_else(|| self.values.last())
            .copied()
            .unwrap_or(min);
        if self.cursor < self.values.len() {
            self.cursor += 1;
        }
        raw.clamp(min, max)
    }
}
