//! RNG module - 7-bag random piece generation
//!
//! Each bag holds one of each piece (I, J, L, O, S, T, Z) in shuffled order.
//! Pieces are drawn in shuffle order until the bag is empty; the next draw
//! refills it with a fresh permutation.
//!
//! The bag is generic over any [`rand::Rng`] so tests can pin a seed while the
//! runner uses an OS-seeded generator.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Shuffle a slice in place with Fisher-Yates.
///
/// For each `index` from `len` down to 1, a partner is drawn uniformly from
/// `[0, index - 1]` (inclusive) and swapped into position `index - 1`.
pub fn shuffle<T, R: Rng>(rng: &mut R, slice: &mut [T]) {
    for index in (1..=slice.len()).rev() {
        let rand_index = rng.random_range(0..index);
        slice.swap(index - 1, rand_index);
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceBag<R = StdRng> {
    /// Pending pieces, stored reversed so the next draw is a `pop`.
    pending: ArrayVec<PieceKind, 7>,
    rng: R,
}

impl PieceBag<StdRng> {
    /// Create a deterministic bag from a seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a bag seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> PieceBag<R> {
    /// Create an empty bag around an existing RNG. The first draw fills it.
    pub fn with_rng(rng: R) -> Self {
        Self {
            pending: ArrayVec::new(),
            rng,
        }
    }

    /// Draw the next piece, refilling with a fresh permutation if the bag is empty
    pub fn next_piece(&mut self) -> PieceKind {
        if let Some(kind) = self.pending.pop() {
            return kind;
        }

        let mut sequence = PieceKind::ALL;
        shuffle(&mut self.rng, &mut sequence);

        // Keep the rest reversed so later draws pop in shuffle order.
        for kind in sequence[1..].iter().rev() {
            self.pending.push(*kind);
        }
        sequence[0]
    }

    /// Number of pieces left before the next refill
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Pending pieces in draw order
    pub fn pending(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.pending.iter().rev().copied()
    }
}

impl Default for PieceBag<StdRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
