//! Error types for Munkres

use thiserror::Error;

/// Main error type for Munkres operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MunkresError {
    /// The matrix has no rows, or its rows have no entries
    #[error("Invalid input: cost matrix is empty")]
    EmptyMatrix,

    /// A row does not have as many entries as the matrix has rows
    #[error("Invalid input: row {row} has {actual} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Costs must be non-negative integers
    #[error("Invalid input: negative cost {value} at ({row}, {col})")]
    NegativeCost { row: usize, col: usize, value: i64 },

    /// The sum of all entries does not fit the cost type
    #[error("Invalid input: total of all costs overflows i64")]
    CostOverflow,

    /// A text row could not be turned into integers
    #[error("Parse error in row {row}: {message}")]
    Parse { row: usize, message: String },

    /// Brute force was asked to enumerate too many permutations
    #[error("Problem too large: size {size} exceeds brute force limit {limit}")]
    ProblemTooLarge { size: usize, limit: usize },

    /// The configured step limit was reached before the matching completed
    #[error("Step limit of {limit} reached before an optimal assignment was found")]
    StepLimitExceeded { limit: u64 },

    /// Solving was cancelled through the terminate flag
    #[error("Solver was cancelled")]
    Cancelled,

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Munkres operations
pub type Result<T> = std::result::Result<T, MunkresError>;
