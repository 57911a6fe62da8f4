//! Per-cell marks of the Hungarian algorithm.

/// Label of one cell of the cost matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Unmarked,
    /// Tentative assignment.
    Starred,
    /// Candidate link of an augmenting path.
    Primed,
}

/// An `n x n` table of [`Mark`]s, parallel to the cost matrix.
///
/// Every row and every column holds at most one starred cell; the mutating
/// methods below keep that true as long as callers only star cells whose
/// row and column are free of stars, or flip a whole augmenting path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    n: usize,
    marks: Vec<Mark>,
}

impl Mask {
    /// Creates an all-unmarked mask of order `n`.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            marks: vec![Mark::Unmarked; n * n],
        }
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.marks[row * self.n + col]
    }

    pub fn set(&mut self, row: usize, col: usize, mark: Mark) {
        self.marks[row * self.n + col] = mark;
    }

    pub fn star(&mut self, row: usize, col: usize) {
        self.set(row, col, Mark::Starred);
    }

    pub fn prime(&mut self, row: usize, col: usize) {
        self.set(row, col, Mark::Primed);
    }

    /// Column of the star in `row`, if any.
    pub fn star_in_row(&self, row: usize) -> Option<usize> {
        self.find_in_row(row, Mark::Starred)
    }

    /// Row of the star in `col`, if any.
    pub fn star_in_col(&self, col: usize) -> Option<usize> {
        (0..self.n).find(|&row| self.get(row, col) == Mark::Starred)
    }

    /// Column of the prime in `row`, if any.
    pub fn prime_in_row(&self, row: usize) -> Option<usize> {
        self.find_in_row(row, Mark::Primed)
    }

    /// Resets every primed cell to unmarked.
    pub fn clear_primes(&mut self) {
        for mark in &mut self.marks {
            if *mark == Mark::Primed {
                *mark = Mark::Unmarked;
            }
        }
    }

    /// Number of starred cells.
    pub fn star_count(&self) -> usize {
        self.marks.iter().filter(|&&m| m == Mark::Starred).count()
    }

    /// Starred column of each row, row-indexed.
    pub fn starred_columns(&self) -> Vec<Option<usize>> {
        (0..self.n).map(|row| self.star_in_row(row)).collect()
    }

    /// Returns true if no row and no column holds more than one star.
    pub fn is_consistent(&self) -> bool {
        let n = self.n;
        let mut col_stars = vec![0usize; n];
        for row in 0..n {
            let mut row_stars = 0;
            for (col, count) in col_stars.iter_mut().enumerate() {
                if self.get(row, col) == Mark::Starred {
                    row_stars += 1;
                    *count += 1;
                }
            }
            if row_stars > 1 {
                return false;
            }
        }
        col_stars.iter().all(|&count| count <= 1)
    }

    fn find_in_row(&self, row: usize, mark: Mark) -> Option<usize> {
        self.marks[row * self.n..(row + 1) * self.n]
            .iter()
            .position(|&m| m == mark)
    }
}

#[cfg(test)]
mod tests;
