//! Deterministic random number generation for game sessions.
//!
//! Every session owns a `GameRng` built from a `u64` seed, so a session can be
//! replayed exactly: same seed, same deck order, same secret word.
//!
//! ```
//! use arcade_rules::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.gen_range_i64(1..=100), b.gen_range_i64(1..=100));
//!
//! // A replay draws from a fork, which is reproducible in turn
//! assert_eq!(a.fork().gen_range_usize(0..52), b.fork().gen_range_usize(0..52));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG shared by all games.
///
/// Uses ChaCha8 so sequences are stable across platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG into an independent, deterministic branch.
    ///
    /// Used when a session is replayed: each replay gets a fresh fork so the
    /// new round differs from the last one but is still reproducible.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random i64 in the given inclusive range.
    pub fn gen_range_i64(&mut self, range: std::ops::RangeInclusive<i64>) -> i64 {
        self.inner.gen_range(range)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Pick an index in `0..len` that differs from `excluded`.
    ///
    /// Returns `None` when no such index exists (`len < 2`, or `len == 1`
    /// and the only index is excluded).
    pub fn gen_index_except(&mut self, len: usize, excluded: usize) -> Option<usize> {
        let candidates = if excluded < len { len - 1 } else { len };
        if candidates == 0 {
            return None;
        }
        let idx = self.inner.gen_range(0..candidates);
        // Skip over the excluded slot
        if excluded < len && idx >= excluded {
            Some(idx + 1)
        } else {
            Some(idx)
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic_and_distinct() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut forked1 = rng1.fork();
        let mut forked2 = rng2.fork();

        let seq1: Vec<_> = (0..10).map(|_| forked1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked2.gen_range_usize(0..1000)).collect();
        assert_eq!(seq1, seq2);

        let parent: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        assert_ne!(parent, seq1);

        // A second fork from the same parent is a new branch
        let mut again = rng1.fork();
        let seq3: Vec<_> = (0..10).map(|_| again.gen_range_usize(0..1000)).collect();
        assert_ne!(seq1, seq3);
    }

    #[test]
    fn test_gen_index_except() {
        let mut rng = GameRng::new(3);

        for _ in 0..200 {
            let idx = rng.gen_index_except(5, 2).unwrap();
            assert!(idx < 5);
            assert_ne!(idx, 2);
        }

        // Only one candidate left
        for _ in 0..10 {
            assert_eq!(rng.gen_index_except(2, 0), Some(1));
        }

        assert_eq!(rng.gen_index_except(1, 0), None);
        assert_eq!(rng.gen_index_except(0, 0), None);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }
}
