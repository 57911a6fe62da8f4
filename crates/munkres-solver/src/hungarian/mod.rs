//! Kuhn-Munkres ("Hungarian") algorithm as an explicit step state machine.
//!
//! The solver owns its working cost matrix, the star/prime [`Mask`] and the
//! [`CoverState`]. Each [`Step`] has one transition method returning the
//! next step; [`HungarianSolver::solve`] drives them until [`Step::Done`].
//!
//! Logging levels:
//! - **INFO**: Solve start/end
//! - **DEBUG**: Augmentations and matrix adjustments
//! - **TRACE**: Every state transition

mod path;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use munkres_config::EnvironmentMode;
use munkres_core::{Assignment, CostMatrix, MunkresError, Result};
use tracing::{debug, info, trace};

use crate::cover::CoverState;
use crate::mask::Mask;
use crate::solver::{AssignmentSolver, Solution};
use crate::stats::SolveStats;

pub use path::{AugmentingPath, Location};

/// State of the Hungarian state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Cover every starred column; finish once all `n` are covered.
    CheckComplete,
    /// Prime the first uncovered zero in row-major order.
    FindZero,
    /// Flip the augmenting path seeded at a primed zero with no star in its row.
    Augment(Location),
    /// Shift the smallest uncovered value to create a new uncovered zero.
    AdjustMatrix,
    /// The starred cells form an optimal assignment.
    Done,
}

/// Single-use solver bound to one cost matrix.
///
/// Construction row-reduces and column-reduces a working copy of the matrix
/// and stars zeros greedily in row-major order. The machine then starts at
/// [`Step::CheckComplete`].
///
/// # Example
///
/// ```
/// use munkres_core::CostMatrix;
/// use munkres_solver::{AssignmentSolver, HungarianSolver};
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![1, 2, 3],
///     vec![2, 4, 6],
///     vec![3, 6, 9],
/// ]).unwrap();
///
/// let solution = HungarianSolver::new(matrix).solve().unwrap();
/// assert_eq!(solution.total_cost, 10);
/// assert_eq!(solution.assignment.to_string(), "(1-3)(2-2)(3-1)");
/// ```
#[derive(Debug)]
pub struct HungarianSolver {
    costs: CostMatrix,
    matrix: CostMatrix,
    mask: Mask,
    covers: CoverState,
    step: Step,
    stats: SolveStats,
    step_limit: Option<u64>,
    terminate_flag: Option<Arc<AtomicBool>>,
    environment_mode: EnvironmentMode,
}

impl HungarianSolver {
    pub fn new(costs: CostMatrix) -> Self {
        let n = costs.size();
        let mut matrix = costs.clone();
        matrix.reduce_rows();
        matrix.reduce_cols();

        let mut solver = Self {
            costs,
            matrix,
            mask: Mask::new(n),
            covers: CoverState::new(n),
            step: Step::CheckComplete,
            stats: SolveStats::default(),
            step_limit: None,
            terminate_flag: None,
            environment_mode: EnvironmentMode::default(),
        };
        solver.star_initial_zeros();
        solver
    }

    /// Fails with [`MunkresError::StepLimitExceeded`] after `limit` steps.
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Fails with [`MunkresError::Cancelled`] at the next step once `flag`
    /// is set. The flag may be set from another thread.
    pub fn with_terminate_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.terminate_flag = Some(flag);
        self
    }

    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    pub fn size(&self) -> usize {
        self.costs.size()
    }

    /// The step the next call to [`advance`](Self::advance) executes.
    pub fn current_step(&self) -> Step {
        self.step
    }

    /// The reduced working matrix.
    pub fn working_matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn covers(&self) -> &CoverState {
        &self.covers
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Executes the current step and returns the one that follows.
    ///
    /// Calling this on [`Step::Done`] does nothing and is not counted.
    pub fn advance(&mut self) -> Result<Step> {
        if self.step == Step::Done {
            return Ok(Step::Done);
        }
        if let Some(limit) = self.step_limit {
            if self.stats.step_count >= limit {
                return Err(MunkresError::StepLimitExceeded { limit });
            }
        }
        if let Some(flag) = &self.terminate_flag {
            if flag.load(Ordering::SeqCst) {
                return Err(MunkresError::Cancelled);
            }
        }

        let current = self.step;
        let next = match current {
            Step::CheckComplete => self.check_complete(),
            Step::FindZero => self.find_zero(),
            Step::Augment(seed) => self.augment(seed)?,
            Step::AdjustMatrix => self.adjust_matrix()?,
            Step::Done => Step::Done,
        };

        self.stats.record_step();
        trace!(step = self.stats.step_count, from = ?current, to = ?next);

        if self.environment_mode.asserts_steps() && !self.mask.is_consistent() {
            return Err(MunkresError::Internal(format!(
                "more than one star in a line after {current:?}"
            )));
        }

        self.step = next;
        Ok(next)
    }

    /// Stars the first zero of each row whose column has no star yet.
    fn star_initial_zeros(&mut self) {
        let n = self.size();
        let mut col_has_star = vec![false; n];
        for row in 0..n {
            if let Some(col) = (0..n).find(|&col| !col_has_star[col] && self.matrix.is_zero(row, col))
            {
                self.mask.star(row, col);
                col_has_star[col] = true;
            }
        }
    }

    fn check_complete(&mut self) -> Step {
        let n = self.size();
        for col in 0..n {
            if self.mask.star_in_col(col).is_some() {
                self.covers.cover_col(col);
            }
        }

        if self.covers.covered_col_count() == n {
            Step::Done
        } else {
            Step::FindZero
        }
    }

    fn find_zero(&mut self) -> Step {
        let Some(zero) = self.first_uncovered_zero() else {
            return Step::AdjustMatrix;
        };

        self.mask.prime(zero.row, zero.col);
        self.stats.record_prime();

        match self.mask.star_in_row(zero.row) {
            Some(star_col) => {
                self.covers.cover_row(zero.row);
                self.covers.uncover_col(star_col);
                Step::FindZero
            }
            None => Step::Augment(zero),
        }
    }

    fn augment(&mut self, seed: Location) -> Result<Step> {
        let path = AugmentingPath::build(seed, &self.mask)?;
        path.flip(&mut self.mask);
        self.mask.clear_primes();
        self.covers.clear();
        self.stats.record_augmentation();

        debug!(
            event = "augment",
            path_len = path.len(),
            stars = self.mask.star_count(),
        );
        Ok(Step::CheckComplete)
    }

    fn adjust_matrix(&mut self) -> Result<Step> {
        let min_value = self
            .matrix
            .min_uncovered(self.covers.rows(), self.covers.cols())
            .ok_or_else(|| MunkresError::Internal("no uncovered cell to adjust".to_string()))?;

        self.matrix
            .apply_uncovered_adjustment(min_value, self.covers.rows(), self.covers.cols());
        self.stats.record_adjustment();

        debug!(event = "adjust", min_value);
        Ok(Step::FindZero)
    }

    fn first_uncovered_zero(&self) -> Option<Location> {
        let n = self.size();
        (0..n)
            .filter(|&row| !self.covers.is_row_covered(row))
            .find_map(|row| {
                (0..n)
                    .find(|&col| !self.covers.is_col_covered(col) && self.matrix.is_zero(row, col))
                    .map(|col| Location::new(row, col))
            })
    }

    fn into_solution(mut self) -> Result<Solution> {
        let columns = self
            .mask
            .starred_columns()
            .into_iter()
            .enumerate()
            .map(|(row, col)| {
                col.ok_or_else(|| MunkresError::Internal(format!("row {row} has no star")))
            })
            .collect::<Result<Vec<_>>>()?;

        let total_cost = self
            .costs
            .assignment_cost(&columns)
            .ok_or_else(|| MunkresError::Internal("assignment outside matrix".to_string()))?;

        self.stats.finish();
        Ok(Solution {
            assignment: Assignment::new(columns),
            total_cost,
            stats: self.stats,
        })
    }
}

impl AssignmentSolver for HungarianSolver {
    fn solve(mut self) -> Result<Solution> {
        self.stats.start();
        info!(event = "solve_start", strategy = self.strategy_name(), size = self.size());

        while self.advance()? != Step::Done {}

        let solution = self.into_solution()?;
        info!(
            event = "solve_end",
            strategy = "hungarian",
            total_cost = solution.total_cost,
            steps = solution.stats.step_count,
            augmentations = solution.stats.augmentations,
            adjustments = solution.stats.adjustments,
            elapsed_ms = solution.stats.elapsed_ms(),
        );
        Ok(solution)
    }

    fn strategy_name(&self) -> &'static str {
        "hungarian"
    }
}
