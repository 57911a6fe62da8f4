//! Shared test fixtures for Munkres crates.
//!
//! This crate provides deterministic cost matrices for testing.
//!
//! - [`scenarios`] - Hand-checked matrices with known optima
//! - [`generator`] - Seeded random matrix generation
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! munkres-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```
//! use munkres_test::{scenarios, MatrixGenerator};
//!
//! let known = scenarios::small_four();
//! let random = MatrixGenerator::new(42).matrix(5, 100);
//! assert_eq!(known.size(), 4);
//! assert_eq!(random.size(), 5);
//! ```

pub mod generator;
pub mod scenarios;

pub use generator::MatrixGenerator;
