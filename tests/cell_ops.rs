//! Integration tests for cell-level operations: set, fill, clear, indexing.

use gridmat::{Matrix, MatrixError};

// ---------------------------------------------------------------------------
// Single-cell writes and reads
// ---------------------------------------------------------------------------

#[test]
fn set_then_get_round_trip() {
    let mut m: Matrix<i32> = Matrix::new();
    m.set(7, 0, 1).unwrap();
    assert_eq!(m.get(0, 1), Ok(Some(&7)));
    assert_eq!(m.get(0, 0), Ok(None));
}

#[test]
fn set_overwrites_existing_value() {
    let mut m: Matrix<i32> = Matrix::new();
    m.set(1, 2, 2).unwrap();
    m.set(9, 2, 2).unwrap();
    assert_eq!(m.get(2, 2), Ok(Some(&9)));
}

#[test]
fn out_of_bounds_set_reports_coordinates() {
    let mut m: Matrix<i32> = Matrix::new();
    let err = m.set(9, 3, 0).unwrap_err();
    assert_eq!(
        err,
        MatrixError::IndexOutOfBounds {
            row: 3,
            col: 0,
            rows: 3,
            cols: 3
        }
    );
    assert!(m.as_slice().iter().all(|cell| cell.is_none()));
}

#[test]
fn out_of_bounds_get_is_an_error_not_an_empty_cell() {
    let m: Matrix<i32> = Matrix::new();
    assert!(m.get(0, 3).is_err());
    assert_eq!(m.get(0, 2), Ok(None));
}

#[test]
fn chained_sets_propagate_errors() -> Result<(), MatrixError> {
    let mut m: Matrix<i32> = Matrix::square(2)?;
    m.set(1, 0, 0)?.set(2, 0, 1)?.set(3, 1, 0)?.set(4, 1, 1)?;
    assert_eq!(m.row(0), &[Some(1), Some(2)]);
    assert_eq!(m.row(1), &[Some(3), Some(4)]);
    Ok(())
}

// ---------------------------------------------------------------------------
// Bulk writes
// ---------------------------------------------------------------------------

#[test]
fn set_all_overwrites_everything() {
    let mut m: Matrix<i32> = Matrix::square(2).unwrap();
    m.set(1, 0, 0).unwrap();
    m.set_all(5);
    assert!(m.as_slice().iter().all(|cell| *cell == Some(5)));
}

#[test]
fn fill_touches_only_empty_cells() {
    let mut m: Matrix<i32> = Matrix::with_shape(1, 4).unwrap();
    m.set(1, 0, 0).unwrap();
    m.set(0, 0, 1).unwrap();
    m.set(8, 0, 2).unwrap();
    m.fill(8);
    assert_eq!(m.row(0), &[Some(1), Some(0), Some(8), Some(8)]);
}

#[test]
fn fill_on_full_matrix_changes_nothing() {
    let mut m: Matrix<i32> = Matrix::ones(2, 2).unwrap();
    let before = m.clone();
    m.fill(9);
    assert_eq!(m, before);
}

// ---------------------------------------------------------------------------
// Clearing
// ---------------------------------------------------------------------------

#[test]
fn clear_element_resets_one_cell() {
    let mut m: Matrix<i32> = Matrix::ones(2, 2).unwrap();
    m.clear_element(0, 1).unwrap();
    assert_eq!(m.get(0, 1), Ok(None));
    assert_eq!(m.get(0, 0), Ok(Some(&1)));
}

#[test]
fn clear_element_checks_bounds() {
    let mut m: Matrix<i32> = Matrix::new();
    assert!(m.clear_element(0, 9).is_err());
}

#[test]
fn clear_matches_fresh_matrix() {
    let mut m: Matrix<i32> = Matrix::with_shape(2, 4).unwrap();
    m.set_all(3);
    m.clear();
    assert_eq!(m, Matrix::with_shape(2, 4).unwrap());
}

// ---------------------------------------------------------------------------
// Indexing
// ---------------------------------------------------------------------------

#[test]
fn indexing_reads_and_writes() {
    let mut m: Matrix<i32> = Matrix::square(2).unwrap();
    m[(0, 0)] = Some(10);
    m[(1, 1)] = Some(20);
    assert_eq!(m[(0, 0)], Some(10));
    assert_eq!(m[(0, 1)], None);
    m[(0, 0)] = None;
    assert_eq!(m[(0, 0)], None);
    assert_eq!(m[(1, 1)], Some(20));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_panics_out_of_range() {
    let m: Matrix<i32> = Matrix::new();
    let _ = &m[(3, 0)];
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_panics_on_column_overflow() {
    let m: Matrix<i32> = Matrix::with_shape(3, 2).unwrap();
    let _ = &m[(0, 2)];
}

// ---------------------------------------------------------------------------
// Row access
// ---------------------------------------------------------------------------

#[test]
fn row_borrows_backing_storage() {
    let mut m: Matrix<i32> = Matrix::with_shape(2, 3).unwrap();
    m.set(4, 1, 0).unwrap().set(5, 1, 1).unwrap().set(6, 1, 2).unwrap();
    assert_eq!(m.row(0), &[None, None, None]);
    assert_eq!(m.row(1), &[Some(4), Some(5), Some(6)]);
}
