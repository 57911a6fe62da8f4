//! Exhaustive permutation search.
//!
//! Scores every row-to-column permutation and keeps the first one with the
//! lowest total. The cost is O(n!) so it is only meant as a reference
//! oracle for small matrices; sizes above the configured ceiling are
//! refused.

mod permutations;

use munkres_config::DEFAULT_BRUTE_FORCE_LIMIT;
use munkres_core::{Assignment, Cost, CostMatrix, MunkresError, Result};
use tracing::{info, warn};

use crate::solver::{AssignmentSolver, Solution};
use crate::stats::SolveStats;

pub use permutations::Permutations;

/// Largest size brute force handles without a warning.
pub const PRACTICAL_SIZE: usize = 8;

/// Reference solver enumerating all permutations.
///
/// Ties are broken by enumeration order: the lexicographically smallest
/// optimal permutation wins.
///
/// # Example
///
/// ```
/// use munkres_core::CostMatrix;
/// use munkres_solver::{AssignmentSolver, BruteForceSolver};
///
/// let matrix = CostMatrix::from_rows(vec![vec![4, 1], vec![2, 8]]).unwrap();
/// let solution = BruteForceSolver::new(matrix).solve().unwrap();
///
/// assert_eq!(solution.total_cost, 3);
/// assert_eq!(solution.assignment.columns(), &[1, 0]);
/// assert_eq!(solution.stats.permutations_evaluated, 2);
/// ```
#[derive(Debug, Clone)]
pub struct BruteForceSolver {
    costs: CostMatrix,
    limit: usize,
}

impl BruteForceSolver {
    pub fn new(costs: CostMatrix) -> Self {
        Self {
            costs,
            limit: DEFAULT_BRUTE_FORCE_LIMIT,
        }
    }

    /// Sets the largest matrix size accepted.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn size(&self) -> usize {
        self.costs.size()
    }
}

impl AssignmentSolver for BruteForceSolver {
    fn solve(self) -> Result<Solution> {
        let n = self.size();
        if n > self.limit {
            return Err(MunkresError::ProblemTooLarge {
                size: n,
                limit: self.limit,
            });
        }
        if n > PRACTICAL_SIZE {
            warn!(
                event = "brute_force_large",
                size = n,
                practical_size = PRACTICAL_SIZE,
            );
        }

        let mut stats = SolveStats::default();
        stats.start();
        info!(event = "solve_start", strategy = self.strategy_name(), size = n);

        let mut best: Option<(Cost, Vec<usize>)> = None;
        for permutation in Permutations::new(n) {
            let cost = self.costs.assignment_cost(&permutation).ok_or_else(|| {
                MunkresError::Internal("permutation outside matrix".to_string())
            })?;
            stats.record_permutation();
            if best.as_ref().map_or(true, |(best_cost, _)| cost < *best_cost) {
                best = Some((cost, permutation));
            }
        }

        let (total_cost, columns) =
            best.ok_or_else(|| MunkresError::Internal("no permutation scored".to_string()))?;
        stats.finish();

        info!(
            event = "solve_end",
            strategy = "brute_force",
            total_cost,
            permutations = stats.permutations_evaluated,
            elapsed_ms = stats.elapsed_ms(),
        );
        Ok(Solution {
            assignment: Assignment::new(columns),
            total_cost,
            stats,
        })
    }

    fn strategy_name(&self) -> &'static str {
        "brute_force"
    }
}
