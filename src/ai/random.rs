//! The one source of randomness in move selection.

use rand::{Rng, SeedableRng, random, rngs::StdRng};

/// Seedable uniform index generator.
///
/// Every random decision the AI makes (random cells, the easy tier's coin
/// flip on whether to block) is drawn through [`RandomIndex::index`], so a
/// fixed seed replays a game exactly.
#[derive(Debug, Clone)]
pub struct RandomIndex {
    rng: StdRng,
}

impl RandomIndex {
    /// Create a generator; `None` seeds from system entropy
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed.unwrap_or_else(random)),
        }
    }

    /// Create a generator with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Uniform index in `0..len`, or `None` when `len` is zero
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    /// Uniformly chosen element of `items`
    pub fn choose(&mut self, items: &[usize]) -> Option<usize> {
        self.index(items.len()).map(|i| items[i])
    }

    /// Fair coin
    pub fn flip(&mut self) -> bool {
        self.index(2) == Some(0)
    }
}

impl Default for RandomIndex {
    fn default() -> Self {
        Self::new(None)
    }
}
