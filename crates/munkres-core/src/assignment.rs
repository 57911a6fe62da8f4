//! Row-to-column assignment produced by a solver.

use std::fmt;

/// An assignment of every row to a distinct column.
///
/// Index `i` holds the 0-based column assigned to row `i`.
///
/// The [`Display`](fmt::Display) form is the 1-based token sequence
/// consumed by text clients: one `(row-col)` token per row with no
/// separators.
///
/// # Example
///
/// ```
/// use munkres_core::Assignment;
///
/// let assignment = Assignment::new(vec![2, 1, 0]);
/// assert_eq!(assignment.to_string(), "(1-3)(2-2)(3-1)");
/// assert!(assignment.is_permutation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    columns: Vec<usize>,
}

impl Assignment {
    pub fn new(columns: Vec<usize>) -> Self {
        Self { columns }
    }

    /// Returns the assigned column of every row, row-indexed.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Returns the number of assigned rows.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the column assigned to `row`, if the row exists.
    pub fn column_of(&self, row: usize) -> Option<usize> {
        self.columns.get(row).copied()
    }

    /// Iterates over 0-based `(row, col)` pairs in row order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.columns.iter().copied().enumerate()
    }

    /// Returns `[row + 1, col + 1]` pairs in row order.
    pub fn to_one_based_pairs(&self) -> Vec<[usize; 2]> {
        self.pairs().map(|(row, col)| [row + 1, col + 1]).collect()
    }

    /// Returns true if every column in `0..len` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let n = self.columns.len();
        let mut seen = vec![false; n];
        for &col in &self.columns {
            if col >= n || seen[col] {
                return false;
            }
            seen[col] = true;
        }
        true
    }

    pub fn into_columns(self) -> Vec<usize> {
        self.columns
    }
}

impl From<Vec<usize>> for Assignment {
    fn from(columns: Vec<usize>) -> Self {
        Self::new(columns)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, col) in self.pairs() {
            write!(f, "({}-{})", row + 1, col + 1)?;
        }
        Ok(())
    }
}
