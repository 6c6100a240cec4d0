//! Seeded random source for level generation
//!
//! One seed reproduces one sequence of levels.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Reproducible random stream that remembers the seed it started from
#[derive(Debug, Clone)]
pub struct LevelRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl LevelRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed 0 derives a seed from the clock; any other value is used as-is.
    #[cfg(feature = "std")]
    pub fn from_config_seed(seed: u64) -> Self {
        if seed == 0 {
            Self::from_clock()
        } else {
            Self::new(seed)
        }
    }

    /// Without std there is no clock, so seed 0 is used as-is.
    #[cfg(not(feature = "std"))]
    pub fn from_config_seed(seed: u64) -> Self {
        Self::new(seed)
    }

    #[cfg(feature = "std")]
    pub fn from_clock() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        // 0 is reserved for "use the clock"
        Self::new(nanos.max(1))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw from `0..n`, or 0 when `n` is 0
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform draw from `lo..=hi`. Returns `lo` when the range is empty.
    pub fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.below(items.len()))
        }
    }

    /// Fisher-Yates, in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }

    /// Pick an index with probability proportional to its weight.
    ///
    /// Non-finite and non-positive weights count as zero. Returns `None` when
    /// the total weight is zero.
    pub fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        let usable = |w: f64| if w.is_finite() && w > 0.0 { w } else { 0.0 };
        let heaviest = weights.iter().copied().map(usable).fold(0.0, f64::max);
        if heaviest <= 0.0 {
            return None;
        }
        // Scaled into (0, 1] so the sum stays finite for huge weights
        let scaled = |w: f64| usable(w) / heaviest;
        let total: f64 = weights.iter().copied().map(scaled).sum();

        let mut roll = self.rng.gen_range(0.0..total);
        let mut last = None;
        for (i, &w) in weights.iter().enumerate() {
            let w = scaled(w);
            if w <= 0.0 {
                continue;
            }
            if roll < w {
                return Some(i);
            }
            roll -= w;
            last = Some(i);
        }
        // Float rounding can leave a sliver past the final bucket
        last
    }
}

impl Default for LevelRng {
    fn default() -> Self {
        Self::from_config_seed(0)
    }
}
