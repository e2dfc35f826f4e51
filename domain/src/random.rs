//! Injectable randomness
//!
//! Lifeline outcomes and answer ordering draw from a [`RandomSource`] instead
//! of ambient randomness. Infrastructure provides an RNG-backed adapter;
//! tests use [`ScriptedRandom`] to pin every draw.

use std::collections::VecDeque;

/// Source of random draws used by the game rules
pub trait RandomSource: Send {
    /// Uniform index in `0..upper`. `upper` is always at least 1.
    fn next_below(&mut self, upper: usize) -> usize;

    /// Returns `true` with the given probability (clamped to `[0, 1]`)
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform integer in `low..=high`
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

/// Fisher-Yates shuffle driven by a [`RandomSource`]
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_below(i + 1);
        items.swap(i, j);
    }
}

/// Deterministic source replaying a fixed list of raw values.
///
/// Each draw pops one value (0 once the list is exhausted):
/// - `next_below(n)` yields `value % n`
/// - `chance(p)` is a hit when `value % 100 < p * 100`
/// - `next_in_range(lo, hi)` yields `lo + value % (hi - lo + 1)`
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<u32>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet consumed
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    fn pop(&mut self) -> u32 {
        self.values.pop_front().unwrap_or(0)
    }
}

impl RandomSource for ScriptedRandom {
    fn next_below(&mut self, upper: usize) -> usize {
        self.pop() as usize % upper.max(1)
    }

    fn chance(&mut self, probability: f64) -> bool {
        let threshold = (probability.clamp(0.0, 1.0) * 100.0).round() as u32;
        self.pop() % 100 < threshold
    }

    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            self.pop();
            return low;
        }
        low + self.pop() % (high - low + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_next_below_wraps() {
        let mut rng = ScriptedRandom::new([5, 2]);
        assert_eq!(rng.next_below(3), 2);
        assert_eq!(rng.next_below(3), 2);
        assert_eq!(rng.next_below(3), 0);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_scripted_chance_threshold() {
        let mut rng = ScriptedRandom::new([69, 70, 0]);
        assert!(rng.chance(0.70));
        assert!(!rng.chance(0.70));
        assert!(!rng.chance(0.0));
    }

    #[test]
    fn test_scripted_range() {
        let mut rng = ScriptedRandom::new([7, 100]);
        assert_eq!(rng.next_in_range(10, 14), 12);
        assert_eq!(rng.next_in_range(3, 3), 3);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut items = vec![1, 2, 3, 4];
        let mut rng = ScriptedRandom::new([0, 0, 0]);
        shuffle(&mut items, &mut rng);
        // i=3 -> swap(3,0), i=2 -> swap(2,0), i=1 -> swap(1,0)
        assert_eq!(items, vec![2, 3, 4, 1]);
    }
}
