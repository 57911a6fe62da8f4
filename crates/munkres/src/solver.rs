//! Solver entry points that hide configuration loading.

use munkres_config::{ConfigError, SolverConfig};
use munkres_core::{parse_rows, CostMatrix, Result};
use munkres_solver::{solve, AssignmentSolver, HungarianSolver, Solution};
use tracing::warn;

/// Configuration file looked up in the working directory.
const CONFIG_FILE: &str = "solver.toml";

/// Solves `matrix` using `solver.toml` from the working directory, or the
/// default configuration when that file is absent.
pub fn run_solver(matrix: CostMatrix) -> Result<Solution> {
    let config = match SolverConfig::load(CONFIG_FILE) {
        Ok(config) => config,
        Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            SolverConfig::default()
        }
        Err(err) => {
            warn!(event = "config_ignored", file = CONFIG_FILE, error = %err);
            SolverConfig::default()
        }
    };
    run_solver_with_config(matrix, &config)
}

/// Solves `matrix` with an explicit configuration.
pub fn run_solver_with_config(matrix: CostMatrix, config: &SolverConfig) -> Result<Solution> {
    solve(matrix, config)
}

/// Parses `"(a,b,c)"` rows, solves them with the Hungarian algorithm, and
/// renders the assignment as 1-based `(row-col)` tokens.
///
/// # Example
///
/// ```
/// let text = munkres::optimal_assignments(&["(13,4,7,6)", "(1,11,5,4)", "(6,7,2,8)", "(1,3,5,9)"]).unwrap();
/// assert_eq!(text, "(1-2)(2-4)(3-3)(4-1)");
/// ```
pub fn optimal_assignments<S: AsRef<str>>(rows: &[S]) -> Result<String> {
    let matrix = parse_rows(rows)?;
    let solution = HungarianSolver::new(matrix).solve()?;
    Ok(solution.assignment.to_string())
}
