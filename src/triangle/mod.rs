//! Triangle model
//!
//! Row `r` holds exactly `r + 1` values. A `Triangle` can only be obtained
//! through validation, so every value of this type satisfies the invariant.

mod shape;

pub use shape::ShapeError;
use shape::check_rows;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shape-validated triangular array of integers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")
)]
pub struct Triangle {
    rows: Vec<Vec<i32>>,
}

impl Triangle {
    /// Validate `rows` and wrap them.
    ///
    /// Fails with [`ShapeError::Empty`] for zero rows and with
    /// [`ShapeError::RowLength`] for the first row whose length is not its
    /// index plus one. Rows are never truncated or padded.
    pub fn new(rows: Vec<Vec<i32>>) -> Result<Self, ShapeError> {
        if rows.is_empty() {
            return Err(ShapeError::Empty);
        }
        Self::validate(&rows)?;
        Ok(Self { rows })
    }

    /// Shape check on borrowed rows. Zero rows are accepted.
    pub fn validate(rows: &[Vec<i32>]) -> Result<(), ShapeError> {
        check_rows(rows)
    }

    /// Number of rows (always ≥ 1).
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Row `r`, if present.
    pub fn row(&self, r: usize) -> Option<&[i32]> {
        self.rows.get(r).map(Vec::as_slice)
    }

    /// All rows, apex first.
    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }

    /// Value at `(row, col)`, if inside the triangle.
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        self.rows.get(row).and_then(|values| values.get(col)).copied()
    }

    /// The base row (where every path terminates).
    pub fn base(&self) -> &[i32] {
        // Non-empty by construction.
        &self.rows[self.rows.len() - 1]
    }

    /// Consume the triangle and return its rows.
    pub fn into_rows(self) -> Vec<Vec<i32>> {
        self.rows
    }
}

impl TryFrom<Vec<Vec<i32>>> for Triangle {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<Triangle> for Vec<Vec<i32>> {
    fn from(triangle: Triangle) -> Self {
        triangle.rows
    }
}
