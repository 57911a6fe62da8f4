//! Parsing of `"(a,b,c)"` style text rows into a [`CostMatrix`].

use crate::error::{MunkresError, Result};
use crate::matrix::{Cost, CostMatrix};

/// Parses one text row per matrix row.
///
/// Each row is a comma-separated list of non-negative integers, optionally
/// wrapped in parentheses or other non-digit decoration, e.g. `"(1,2,1)"`.
///
/// # Example
///
/// ```
/// use munkres_core::parse_rows;
///
/// let matrix = parse_rows(&["(1,2,1)", "(4,1,5)", "(5,2,1)"]).unwrap();
/// assert_eq!(matrix.size(), 3);
/// assert_eq!(matrix.get(2, 0), 5);
/// ```
///
/// # Errors
///
/// Returns [`MunkresError::Parse`] for a row without integers or with a
/// malformed token, and any validation error of [`CostMatrix::from_rows`].
pub fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Result<CostMatrix> {
    let parsed = rows
        .iter()
        .enumerate()
        .map(|(index, row)| parse_row(index, row.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    CostMatrix::from_rows(parsed)
}

fn parse_row(index: usize, row: &str) -> Result<Vec<Cost>> {
    let body = row.trim_matches(|c: char| !c.is_ascii_digit());
    if body.is_empty() {
        return Err(MunkresError::Parse {
            row: index,
            message: format!("no integers in {row:?}"),
        });
    }

    body.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<Cost>().map_err(|err| MunkresError::Parse {
                row: index,
                message: format!("invalid integer {token:?}: {err}"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests;
