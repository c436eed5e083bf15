//! Deterministic random number generation for playouts.
//!
//! Every playout takes an explicit seed: the same seed replays the same
//! game, move for move. Forking gives an independent but still
//! deterministic stream for branching simulations.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded, forkable RNG backing [`crate::play::RandomSource`].
#[derive(Clone, Debug)]
pub struct PlayoutRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl PlayoutRng {
    /// Create a new RNG from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork an independent branch.
    ///
    /// Each fork draws a fresh deterministic sequence: forking the same
    /// RNG for the n-th time always yields the same branch.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Generate a uniform index in `range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a uniform element of `slice`, or `None` if it is empty.
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
    fn test_same_seed_same_sequence() {
        let mut a = PlayoutRng::new(42);
        let mut b = PlayoutRng::new(42);

        for _ in 0..50 {
            assert_eq!(a.gen_range_usize(0..81), b.gen_range_usize(0..81));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = PlayoutRng::new(1);
        let mut b = PlayoutRng::new(2);

        let seq_a: Vec<_> = (0..20).map(|_| a.gen_range_usize(0..1000)).collect();
        let seq_b: Vec<_> = (0..20).map(|_| b.gen_range_usize(0..1000)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn test_fork_diverges_from_parent() {
        let mut rng = PlayoutRng::new(7);
        let mut forked = rng.fork();

        let parent: Vec<_> = (0..20).map(|_| rng.gen_range_usize(0..1000)).collect();
        let child: Vec<_> = (0..20).map(|_| forked.gen_range_usize(0..1000)).collect();
        assert_ne!(parent, child);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut a = PlayoutRng::new(7);
        let mut b = PlayoutRng::new(7);

        let mut fa = a.fork();
        let mut fb = b.fork();
        for _ in 0..20 {
            assert_eq!(fa.gen_range_usize(0..1000), fb.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = PlayoutRng::new(3);
        let items = [10, 20, 30];

        let chosen = rng.choose(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
