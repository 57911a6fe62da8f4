//! Munkres Core - Core types for the assignment problem
//!
//! This crate provides the fundamental data shared by every solving strategy:
//! - `CostMatrix`, the validated square table of costs
//! - `Assignment`, the row-to-column permutation a solver produces
//! - Text row parsing for `"(a,b,c)"` style inputs
//! - The error type used across the workspace

pub mod assignment;
pub mod error;
pub mod matrix;
pub mod parse;

pub use assignment::Assignment;
pub use error::{MunkresError, Result};
pub use matrix::{Cost, CostMatrix};
pub use parse::parse_rows;
