//! Alternating primed/starred zero paths.

use munkres_core::{MunkresError, Result};
use smallvec::SmallVec;

use crate::mask::{Mark, Mask};

/// A cell position in the cost matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An alternating sequence of primed and starred zeros.
///
/// The path starts at an uncovered primed zero whose row has no star.
/// Even positions hold primes and odd positions hold stars, and the path
/// ends on a prime whose column has no star. Flipping it turns `k` stars
/// into `k + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    cells: SmallVec<[Location; 16]>,
}

impl AugmentingPath {
    /// Follows "star in this column", then "prime in that row", from `seed`
    /// until a column without a star is reached.
    ///
    /// # Errors
    ///
    /// Returns [`MunkresError::Internal`] if a starred row has no prime,
    /// which cannot happen when the seed came from the zero search.
    pub fn build(seed: Location, mask: &Mask) -> Result<Self> {
        let mut cells: SmallVec<[Location; 16]> = SmallVec::new();
        cells.push(seed);

        let mut col = seed.col;
        while let Some(star_row) = mask.star_in_col(col) {
            cells.push(Location::new(star_row, col));
            col = mask.prime_in_row(star_row).ok_or_else(|| {
                MunkresError::Internal(format!("starred row {star_row} has no primed zero"))
            })?;
            cells.push(Location::new(star_row, col));

            if cells.len() > 2 * mask.size() + 1 {
                return Err(MunkresError::Internal(
                    "augmenting path longer than 2n + 1".to_string(),
                ));
            }
        }

        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Location] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Unstars every starred cell on the path and stars every primed one.
    pub fn flip(&self, mask: &mut Mask) {
        for cell in &self.cells {
            match mask.get(cell.row, cell.col) {
                Mark::Starred => mask.set(cell.row, cell.col, Mark::Unmarked),
                Mark::Primed => mask.star(cell.row, cell.col),
                Mark::Unmarked => {}
            }
        }
    }
}
