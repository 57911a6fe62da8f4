//! Hand-checked cost matrices.

use munkres_core::{Cost, CostMatrix};

fn from_rows(rows: &[&[Cost]]) -> CostMatrix {
    CostMatrix::from_rows(rows.iter().map(|row| row.to_vec()).collect())
        .expect("scenario matrix is valid")
}

/// `(1,2,1)(4,1,5)(5,2,1)`: unique optimum `[0, 1, 2]` with cost 3.
pub fn small_three() -> CostMatrix {
    from_rows(&[&[1, 2, 1], &[4, 1, 5], &[5, 2, 1]])
}

/// `(13,4,7,6)(1,11,5,4)(6,7,2,8)(1,3,5,9)`: unique optimum `[1, 3, 2, 0]`
/// with cost 11.
pub fn small_four() -> CostMatrix {
    from_rows(&[&[13, 4, 7, 6], &[1, 11, 5, 4], &[6, 7, 2, 8], &[1, 3, 5, 9]])
}

/// `a[i][j] = (i + 1) * (j + 1)`: unique optimum `[2, 1, 0]` with cost 10.
/// Needs two augmentations and one matrix adjustment.
pub fn multiplication_three() -> CostMatrix {
    from_rows(&[&[1, 2, 3], &[2, 4, 6], &[3, 6, 9]])
}

/// `n x n` matrix with every entry equal to `value`.
pub fn uniform(n: usize, value: Cost) -> CostMatrix {
    CostMatrix::from_rows(vec![vec![value; n]; n]).expect("uniform matrix is valid")
}

/// Copy of `matrix` with `offset` added to every entry of `row`.
pub fn with_row_offset(matrix: &CostMatrix, row: usize, offset: Cost) -> CostMatrix {
    let mut rows: Vec<Vec<Cost>> = matrix.clone().into();
    rows[row].iter_mut().for_each(|value| *value += offset);
    CostMatrix::from_rows(rows).expect("offset matrix is valid")
}
