use super::*;

#[test]
fn test_cover_and_clear() {
    let mut covers = CoverState::new(3);
    covers.cover_row(1);
    covers.cover_col(0);
    covers.cover_col(2);

    assert!(covers.is_row_covered(1));
    assert!(!covers.is_row_covered(0));
    assert_eq!(covers.covered_col_count(), 2);
    assert_eq!(covers.line_count(), 3);
    assert_eq!(covers.cols(), &[true, false, true]);

    covers.uncover_col(2);
    assert_eq!(covers.covered_col_count(), 1);

    covers.clear();
    assert_eq!(covers.line_count(), 0);
}
