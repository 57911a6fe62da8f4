//! Square cost matrix with the reduction operations of the Munkres algorithm.

use crate::error::{MunkresError, Result};

/// Integer cost of assigning a row to a column.
pub type Cost = i64;

/// A square `n x n` table of costs, `n >= 1`.
///
/// Construction validates the input contract: the matrix is non-empty,
/// square, non-negative, and the sum of all its entries fits in [`Cost`].
/// Once built, a matrix is mutated in place by the reduction steps of a
/// solver that owns it exclusively.
///
/// # Example
///
/// ```
/// use munkres_core::CostMatrix;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![1, 2, 1],
///     vec![4, 1, 5],
///     vec![5, 2, 1],
/// ]).unwrap();
///
/// assert_eq!(matrix.size(), 3);
/// assert_eq!(matrix.get(1, 2), 5);
/// assert_eq!(matrix.assignment_cost(&[0, 1, 2]), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<Cost>>", into = "Vec<Vec<Cost>>")
)]
pub struct CostMatrix {
    n: usize,
    cells: Vec<Cost>,
}

impl CostMatrix {
    /// Builds a matrix from row-major nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`MunkresError::EmptyMatrix`], [`MunkresError::NotSquare`],
    /// [`MunkresError::NegativeCost`] or [`MunkresError::CostOverflow`] when
    /// the rows violate the input contract.
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 || rows[0].is_empty() {
            return Err(MunkresError::EmptyMatrix);
        }

        let mut cells = Vec::with_capacity(n * n);
        let mut total: Cost = 0;
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(MunkresError::NotSquare {
                    row,
                    expected: n,
                    actual: values.len(),
                });
            }
            for (col, value) in values.into_iter().enumerate() {
                if value < 0 {
                    return Err(MunkresError::NegativeCost { row, col, value });
                }
                total = total.checked_add(value).ok_or(MunkresError::CostOverflow)?;
                cells.push(value);
            }
        }

        Ok(Self { n, cells })
    }

    /// Returns the order `n` of the matrix.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Returns the cost at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row >= n` or `col >= n`.
    pub fn get(&self, row: usize, col: usize) -> Cost {
        assert!(row < self.n && col < self.n, "index out of bounds");
        self.cells[row * self.n + col]
    }

    /// Returns one row as a slice.
    pub fn row(&self, row: usize) -> &[Cost] {
        &self.cells[row * self.n..(row + 1) * self.n]
    }

    /// Returns true if the cell at `(row, col)` holds zero.
    pub fn is_zero(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == 0
    }

    /// Total cost of assigning row `i` to `columns[i]` for every row.
    ///
    /// Returns `None` if `columns` has the wrong length or names a column
    /// outside the matrix. Validation at construction guarantees the sum
    /// cannot overflow.
    pub fn assignment_cost(&self, columns: &[usize]) -> Option<Cost> {
        if columns.len() != self.n {
            return None;
        }
        columns.iter().enumerate().try_fold(0, |total: Cost, (row, &col)| {
            (col < self.n).then(|| total + self.cells[row * self.n + col])
        })
    }

    /// Subtracts each row's minimum from every entry of that row.
    ///
    /// Afterwards every row contains at least one zero.
    pub fn reduce_rows(&mut self) {
        for row in self.cells.chunks_mut(self.n) {
            if let Some(&min) = row.iter().min() {
                row.iter_mut().for_each(|value| *value -= min);
            }
        }
    }

    /// Subtracts each column's minimum from every entry of that column.
    ///
    /// Zeros introduced by [`reduce_rows`](Self::reduce_rows) survive, since a
    /// column already holding a zero has minimum zero.
    pub fn reduce_cols(&mut self) {
        let n = self.n;
        for col in 0..n {
            let min = (0..n).map(|row| self.cells[row * n + col]).min();
            if let Some(min) = min {
                for row in 0..n {
                    self.cells[row * n + col] -= min;
                }
            }
        }
    }

    /// Smallest value among cells whose row and column are both uncovered.
    ///
    /// Returns `None` when every cell is covered by at least one line.
    pub fn min_uncovered(&self, row_covered: &[bool], col_covered: &[bool]) -> Option<Cost> {
        self.uncovered_cells(row_covered, col_covered)
            .map(|(row, col)| self.cells[row * self.n + col])
            .min()
    }

    /// Adds `min_value` to every doubly covered cell and subtracts it from
    /// every uncovered cell. Cells covered by exactly one line are untouched.
    pub fn apply_uncovered_adjustment(
        &mut self,
        min_value: Cost,
        row_covered: &[bool],
        col_covered: &[bool],
    ) {
        let n = self.n;
        for row in 0..n {
            for col in 0..n {
                let cell = &mut self.cells[row * n + col];
                match (row_covered[row], col_covered[col]) {
                    (true, true) => *cell += min_value,
                    (false, false) => *cell -= min_value,
                    _ => {}
                }
            }
        }
    }

    fn uncovered_cells<'a>(
        &self,
        row_covered: &'a [bool],
        col_covered: &'a [bool],
    ) -> impl Iterator<Item = (usize, usize)> + 'a {
        let n = self.n;
        (0..n)
            .filter(move |&row| !row_covered[row])
            .flat_map(move |row| {
                (0..n)
                    .filter(move |&col| !col_covered[col])
                    .map(move |col| (row, col))
            })
    }
}

impl TryFrom<Vec<Vec<Cost>>> for CostMatrix {
    type Error = MunkresError;

    fn try_from(rows: Vec<Vec<Cost>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<Cost>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix
            .cells
            .chunks(matrix.n)
            .map(<[Cost]>::to_vec)
            .collect()
    }
}
