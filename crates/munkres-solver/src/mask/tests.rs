//! Tests for the mark table.

use super::*;

#[test]
fn test_new_mask_is_unmarked() {
    let mask = Mask::new(3);
    assert_eq!(mask.star_count(), 0);
    assert_eq!(mask.starred_columns(), vec![None, None, None]);
    assert!(mask.is_consistent());
}

#[test]
fn test_star_and_prime_lookups() {
    let mut mask = Mask::new(3);
    mask.star(0, 2);
    mask.star(1, 0);
    mask.prime(1, 1);

    assert_eq!(mask.star_in_row(0), Some(2));
    assert_eq!(mask.star_in_row(2), None);
    assert_eq!(mask.star_in_col(0), Some(1));
    assert_eq!(mask.star_in_col(1), None);
    assert_eq!(mask.prime_in_row(1), Some(1));
    assert_eq!(mask.prime_in_row(0), None);
    assert_eq!(mask.starred_columns(), vec![Some(2), Some(0), None]);
}

#[test]
fn test_clear_primes_keeps_stars() {
    let mut mask = Mask::new(2);
    mask.star(0, 0);
    mask.prime(0, 1);
    mask.prime(1, 0);
    mask.clear_primes();

    assert_eq!(mask.get(0, 0), Mark::Starred);
    assert_eq!(mask.get(0, 1), Mark::Unmarked);
    assert_eq!(mask.get(1, 0), Mark::Unmarked);
}

#[test]
fn test_consistency_detects_double_star_in_row() {
    let mut mask = Mask::new(2);
    mask.star(0, 0);
    mask.star(0, 1);
    assert!(!mask.is_consistent());
}

#[test]
fn test_consistency_detects_double_star_in_col() {
    let mut mask = Mask::new(2);
    mask.star(0, 1);
    mask.star(1, 1);
    assert!(!mask.is_consistent());
}
