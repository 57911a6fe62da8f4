//! Munkres Solver Engine
//!
//! This crate provides the solving strategies for the assignment problem:
//! - `HungarianSolver`, the O(n³) masked step state machine
//! - `BruteForceSolver`, the O(n!) permutation oracle for small matrices
//! - Mark and cover bookkeeping shared by the state machine
//! - Solve statistics and the configuration-driven `solve` entry point

pub mod brute_force;
pub mod cover;
pub mod hungarian;
pub mod mask;
pub mod solver;
pub mod stats;

pub use brute_force::{BruteForceSolver, Permutations};
pub use cover::CoverState;
pub use hungarian::{AugmentingPath, HungarianSolver, Location, Step};
pub use mask::{Mark, Mask};
pub use solver::{solve, verify_solution, AssignmentSolver, Solution};
pub use stats::SolveStats;

#[cfg(test)]
mod oracle_tests;
