use thiserror::Error;

/// Violations of the triangle shape invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A constructed triangle must have at least one row.
    #[error("triangle has no rows")]
    Empty,

    /// Row `row` does not hold exactly `row + 1` elements.
    #[error("row {row} has {actual} elements, expected {expected}")]
    RowLength {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length required by the invariant (`row + 1`).
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

impl ShapeError {
    /// Index of the offending row, if the error concerns a specific row.
    pub fn row(&self) -> Option<usize> {
        match self {
            ShapeError::Empty => None,
            ShapeError::RowLength { row, .. } => Some(*row),
        }
    }
}

/// Check that `rows[r].len() == r + 1` for every row.
///
/// Reports the first offending row. An empty slice passes; callers that need
/// a non-empty triangle check that separately.
pub(crate) fn check_rows(rows: &[Vec<i32>]) -> Result<(), ShapeError> {
    for (row, values) in rows.iter().enumerate() {
        let expected = row + 1;
        if values.len() != expected {
            return Err(ShapeError::RowLength {
                row,
                expected,
                actual: values.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_first_bad_row() {
        let rows = vec![vec![1], vec![2, 3], vec![4], vec![5]];
        let err = check_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            ShapeError::RowLength {
                row: 2,
                expected: 3,
                actual: 1
            }
        );
        assert_eq!(err.row(), Some(2));
    }

    #[test]
    fn empty_slice_passes() {
        assert!(check_rows(&[]).is_ok());
    }

    #[test]
    fn overlong_row_is_rejected() {
        let rows = vec![vec![1, 2]];
        assert_eq!(
            check_rows(&rows),
            Err(ShapeError::RowLength {
                row: 0,
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn message_names_row_and_lengths() {
        let err = ShapeError::RowLength {
            row: 1,
            expected: 2,
            actual: 1,
        };
        assert_eq!(err.to_string(), "row 1 has 1 elements, expected 2");
    }
}
