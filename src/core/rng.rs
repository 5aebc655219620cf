//! Injected randomness for deck draws and reshuffles.
//!
//! The engine never embeds a random source. Anything that draws takes a
//! `&mut impl Randomness`, so tests can script exact draw sequences and
//! hosts can checkpoint the production RNG alongside a session.
//!
//! ## Usage
//!
//! ```
//! use pile_engine::core::{GameRng, Randomness};
//!
//! let mut rng = GameRng::new(42);
//! let index = rng.index(10);
//! assert!(index < 10);
//!
//! // Same seed, same sequence
//! let mut again = GameRng::new(42);
//! assert_eq!(again.index(10), index);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::cards::CardValue;

/// Uniform random index and shuffle capability.
pub trait Randomness {
    /// Return a uniformly random index in `[0, upper)`.
    ///
    /// Callers guarantee `upper > 0`.
    fn index(&mut self, upper: usize) -> usize;

    /// Shuffle card values in place.
    ///
    /// Default implementation is Fisher-Yates over `index`.
    fn shuffle(&mut self, values: &mut [CardValue]) {
        for i in (1..values.len()).rev() {
            let j = self.index(i + 1);
            values.swap(i, j);
        }
    }
}

impl<R: Randomness + ?Sized> Randomness for &mut R {
    fn index(&mut self, upper: usize) -> usize {
        (**self).index(upper)
    }

    fn shuffle(&mut self, values: &mut [CardValue]) {
        (**self).shuffle(values);
    }
}

/// Deterministic production RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Randomness for GameRng {
    fn index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }

    fn shuffle(&mut self, values: &mut [CardValue]) {
        use rand::seq::SliceRandom;
        values.shuffle(&mut self.inner);
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture and restore cost the same
/// regardless of how many draws have happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the last index.
    struct LastIndex;

    impl Randomness for LastIndex {
        fn index(&mut self, upper: usize) -> usize {
            upper - 1
        }
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.index(1000), rng2.index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_index_in_range() {
        let mut rng = GameRng::new(7);
        for upper in 1..50 {
            assert!(rng.index(upper) < upper);
        }
    }

    #[test]
    fn test_shuffle_keeps_values() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

        rng.shuffle(&mut data);

        data.sort_unstable();
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_default_shuffle_uses_index() {
        // Last index every step means every swap is a no-op
        let mut data = vec![1, 2, 3, 4];
        LastIndex.shuffle(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.index(1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.index(1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.index(1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
