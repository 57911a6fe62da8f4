//! Solver trait and configuration-driven dispatch.

use munkres_config::{SolverConfig, Strategy};
use munkres_core::{Assignment, Cost, CostMatrix, MunkresError, Result};
use tracing::debug;

use crate::brute_force::BruteForceSolver;
use crate::hungarian::HungarianSolver;
use crate::stats::SolveStats;

/// A single-use strategy that consumes itself to produce an optimal assignment.
pub trait AssignmentSolver {
    /// Runs the solve to completion.
    fn solve(self) -> Result<Solution>;

    /// Returns the strategy name used in logs.
    fn strategy_name(&self) -> &'static str;
}

/// Result of a solve: the assignment, its cost, and statistics.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Row-indexed assigned columns.
    pub assignment: Assignment,
    /// Sum of the original costs of the assigned cells.
    pub total_cost: Cost,
    /// Statistics from the solve.
    pub stats: SolveStats,
}

/// Solves `matrix` with the strategy and checks selected by `config`.
///
/// # Example
///
/// ```
/// use munkres_config::{SolverConfig, Strategy};
/// use munkres_core::CostMatrix;
/// use munkres_solver::solve;
///
/// let matrix = CostMatrix::from_rows(vec![vec![3, 1], vec![1, 3]]).unwrap();
///
/// let hungarian = solve(matrix.clone(), &SolverConfig::default()).unwrap();
/// let brute = solve(matrix, &SolverConfig::new().with_strategy(Strategy::BruteForce)).unwrap();
///
/// assert_eq!(hungarian.total_cost, 2);
/// assert_eq!(brute.total_cost, 2);
/// ```
///
/// # Errors
///
/// Propagates solver errors. With an asserting environment mode, a result
/// failing verification yields [`MunkresError::Internal`].
pub fn solve(matrix: CostMatrix, config: &SolverConfig) -> Result<Solution> {
    let mode = config.environment_mode;
    let reference = mode.asserts_result().then(|| matrix.clone());

    let solution = match config.strategy {
        Strategy::Hungarian => {
            let mut solver = HungarianSolver::new(matrix).with_environment_mode(mode);
            if let Some(limit) = config.step_count_limit() {
                solver = solver.with_step_limit(limit);
            }
            solver.solve()?
        }
        Strategy::BruteForce => BruteForceSolver::new(matrix)
            .with_limit(config.brute_force_limit)
            .solve()?,
    };

    if let Some(reference) = reference {
        verify_solution(&reference, &solution)?;

        let cross_check = mode.asserts_steps()
            && config.strategy == Strategy::Hungarian
            && reference.size() <= config.brute_force_limit;
        if cross_check {
            let oracle = BruteForceSolver::new(reference)
                .with_limit(config.brute_force_limit)
                .solve()?;
            if oracle.total_cost != solution.total_cost {
                return Err(MunkresError::Internal(format!(
                    "hungarian cost {} differs from brute force cost {}",
                    solution.total_cost, oracle.total_cost
                )));
            }
            debug!(event = "oracle_agrees", total_cost = oracle.total_cost);
        }
    }

    Ok(solution)
}

/// Checks that `solution` is a permutation whose reported cost matches `costs`.
pub fn verify_solution(costs: &CostMatrix, solution: &Solution) -> Result<()> {
    if solution.assignment.len() != costs.size() || !solution.assignment.is_permutation() {
        return Err(MunkresError::Internal(format!(
            "assignment {:?} is not a permutation of 0..{}",
            solution.assignment.columns(),
            costs.size()
        )));
    }

    let recomputed = costs
        .assignment_cost(solution.assignment.columns())
        .ok_or_else(|| MunkresError::Internal("assignment outside matrix".to_string()))?;
    if recomputed != solution.total_cost {
        return Err(MunkresError::Internal(format!(
            "reported cost {} but assignment costs {recomputed}",
            solution.total_cost
        )));
    }

    debug!(event = "solution_verified", total_cost = recomputed);
    Ok(())
}
