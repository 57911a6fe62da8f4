//! Tests for text row parsing.

use super::*;

#[test]
fn test_parse_parenthesized_rows() {
    let matrix = parse_rows(&["(13,4,7,6)", "(1,11,5,4)", "(6,7,2,8)", "(1,3,5,9)"]).unwrap();
    assert_eq!(matrix.size(), 4);
    assert_eq!(matrix.row(0), &[13, 4, 7, 6]);
    assert_eq!(matrix.row(3), &[1, 3, 5, 9]);
}

#[test]
fn test_parse_tolerates_spaces() {
    let matrix = parse_rows(&["( 1, 2 )", "(3 ,4)"]).unwrap();
    assert_eq!(matrix.row(0), &[1, 2]);
    assert_eq!(matrix.row(1), &[3, 4]);
}

#[test]
fn test_parse_owned_strings() {
    let rows = vec!["(7)".to_string()];
    let matrix = parse_rows(&rows).unwrap();
    assert_eq!(matrix.get(0, 0), 7);
}

#[test]
fn test_parse_rejects_row_without_digits() {
    let err = parse_rows(&["(1,2)", "()"]).unwrap_err();
    assert!(matches!(err, MunkresError::Parse { row: 1, .. }));
}

#[test]
fn test_parse_rejects_bad_token() {
    let err = parse_rows(&["(1,x,2)", "(1,2,3)", "(1,2,3)"]).unwrap_err();
    assert!(matches!(err, MunkresError::Parse { row: 0, .. }));
}

#[test]
fn test_parse_rejects_non_square() {
    let err = parse_rows(&["(1,2,3)", "(1,2,3)"]).unwrap_err();
    assert!(matches!(err, MunkresError::NotSquare { .. }));
}

#[test]
fn test_parse_empty_input() {
    let rows: [&str; 0] = [];
    assert_eq!(parse_rows(&rows).unwrap_err(), MunkresError::EmptyMatrix);
}
