//! Munkres - Optimal assignment problem solving in Rust
//!
//! Given an `n x n` matrix of non-negative integer costs, find the
//! one-to-one mapping of rows to columns with the smallest total cost.
//!
//! # Example
//!
//! ```rust
//! use munkres::prelude::*;
//!
//! let matrix = CostMatrix::from_rows(vec![
//!     vec![1, 2, 1],
//!     vec![4, 1, 5],
//!     vec![5, 2, 1],
//! ]).unwrap();
//!
//! let solution = HungarianSolver::new(matrix).solve().unwrap();
//! assert_eq!(solution.total_cost, 3);
//! assert_eq!(solution.assignment.to_string(), "(1-1)(2-2)(3-3)");
//!
//! // Text rows in, formatted tokens out
//! let text = munkres::optimal_assignments(&["(1,2,1)", "(4,1,5)", "(5,2,1)"]).unwrap();
//! assert_eq!(text, "(1-1)(2-2)(3-3)");
//! ```

// Core types
pub use munkres_core::{parse_rows, Assignment, Cost, CostMatrix, MunkresError, Result};

// Configuration
pub use munkres_config::{ConfigError, EnvironmentMode, SolverConfig, Strategy, TerminationConfig};

// Solvers
pub use munkres_solver::{
    solve, AssignmentSolver, BruteForceSolver, HungarianSolver, Solution, SolveStats, Step,
};

mod solver;
pub use solver::{optimal_assignments, run_solver, run_solver_with_config};

pub mod prelude {
    pub use super::{
        AssignmentSolver, BruteForceSolver, Cost, CostMatrix, HungarianSolver, Solution,
        SolverConfig, Strategy,
    };
}
