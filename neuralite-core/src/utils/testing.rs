use crate::tensor::{Matrix, Vector};

/// Checks that `actual` has the same length as `expected` and that every
/// element lies within `tolerance` of its counterpart.
/// Panics with the first offending index otherwise.
pub fn check_vector_near(actual: &Vector, expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Row-wise [`check_vector_near`] for matrices.
pub fn check_matrix_near(actual: &Matrix, expected: &[Vec<f64>], tolerance: f64) {
    assert_eq!(actual.row_count(), expected.len(), "Row count mismatch");
    for (row, expected_row) in actual.rows().iter().zip(expected) {
        check_vector_near(row, expected_row, tolerance);
    }
}
