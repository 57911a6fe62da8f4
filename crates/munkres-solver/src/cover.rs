//! Row and column covering lines.

/// Which rows and columns are excluded from the search for uncovered zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverState {
    rows: Vec<bool>,
    cols: Vec<bool>,
}

impl CoverState {
    /// Creates a cover state of order `n` with nothing covered.
    pub fn new(n: usize) -> Self {
        Self {
            rows: vec![false; n],
            cols: vec![false; n],
        }
    }

    pub fn rows(&self) -> &[bool] {
        &self.rows
    }

    pub fn cols(&self) -> &[bool] {
        &self.cols
    }

    pub fn is_row_covered(&self, row: usize) -> bool {
        self.rows[row]
    }

    pub fn is_col_covered(&self, col: usize) -> bool {
        self.cols[col]
    }

    pub fn cover_row(&mut self, row: usize) {
        self.rows[row] = true;
    }

    pub fn cover_col(&mut self, col: usize) {
        self.cols[col] = true;
    }

    pub fn uncover_col(&mut self, col: usize) {
        self.cols[col] = false;
    }

    /// Number of covered columns.
    pub fn covered_col_count(&self) -> usize {
        self.cols.iter().filter(|&&c| c).count()
    }

    /// Total number of covering lines.
    pub fn line_count(&self) -> usize {
        self.rows.iter().filter(|&&r| r).count() + self.covered_col_count()
    }

    /// Uncovers every row and column.
    pub fn clear(&mut self) {
        self.rows.fill(false);
        self.cols.fill(false);
    }
}

#[cfg(test)]
mod tests;
