//! Seeded random cost matrices.

use munkres_core::{Cost, CostMatrix};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Reproducible source of random square cost matrices.
#[derive(Debug, Clone)]
pub struct MatrixGenerator {
    rng: ChaCha8Rng,
}

impl MatrixGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns an `n x n` matrix with entries uniform in `0..=max_cost`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn matrix(&mut self, n: usize, max_cost: Cost) -> CostMatrix {
        assert!(n > 0, "n must be positive");
        let rows = (0..n)
            .map(|_| {
                (0..n)
                    .map(|_| self.rng.random_range(0..=max_cost))
                    .collect()
            })
            .collect();
        CostMatrix::from_rows(rows).expect("generated matrix is square and non-negative")
    }
}
