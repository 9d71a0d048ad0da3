//! Minimum-sum path solver
//!
//! Bottom-up tabulation over the triangle: the base row seeds the sum table,
//! every cell above adds the smaller of its two successor sums, and a bit per
//! cell remembers which successor won. The path is then replayed from the
//! apex by following those bits.
//!
//! When both successors have the same sum the solver steps straight down, so
//! exactly one optimal path is reported for any input.

mod table;

pub use table::{DirectionTable, MinSumTable};

use std::fmt;

use crate::triangle::{ShapeError, Triangle};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Minimum path sum together with one path achieving it.
///
/// Only produced by the solver; with the `serialize` feature it can be
/// written out but not read back.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MinPath {
    minimum_sum: i64,
    path: Vec<i32>,
    columns: Vec<usize>,
}

impl MinPath {
    /// Result for a triangle with no rows: sum 0, empty path.
    pub fn empty() -> Self {
        Self {
            minimum_sum: 0,
            path: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Minimum total over all apex-to-base paths.
    pub fn minimum_sum(&self) -> i64 {
        self.minimum_sum
    }

    /// Values on the chosen path, one per row, apex first.
    pub fn path(&self) -> &[i32] {
        &self.path
    }

    /// Column visited in each row, apex first.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Number of rows the path crosses.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// True only for the result of an empty triangle.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Split into `(minimum_sum, path)`.
    pub fn into_parts(self) -> (i64, Vec<i32>) {
        (self.minimum_sum, self.path)
    }
}

impl fmt::Display for MinPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {}",
            crate::render::format_path(&self.path),
            self.minimum_sum
        )
    }
}

/// Find the minimum-sum path through a validated triangle.
pub fn find_minimum_path(triangle: &Triangle) -> MinPath {
    solve_rows(triangle.rows())
}

/// Find the minimum-sum path through raw rows.
///
/// The shape is checked before any table is built. Zero rows yield
/// [`MinPath::empty`] rather than an error.
pub fn find_minimum_path_in(rows: &[Vec<i32>]) -> Result<MinPath, ShapeError> {
    if rows.is_empty() {
        tracing::debug!("empty triangle, returning zero-sum path");
        return Ok(MinPath::empty());
    }
    Triangle::validate(rows)?;
    Ok(solve_rows(rows))
}

/// Build the sum and direction tables for a triangle.
pub fn tabulate(triangle: &Triangle) -> (MinSumTable, DirectionTable) {
    fill_tables(triangle.rows())
}

fn solve_rows(rows: &[Vec<i32>]) -> MinPath {
    let height = rows.len();
    tracing::debug!(height, "solving triangle");

    let (sums, directions) = fill_tables(rows);
    let (path, columns) = reconstruct(rows, &directions);
    let minimum_sum = sums.at(0, 0);

    tracing::debug!(minimum_sum, right_steps = directions.right_count(), "solved");
    MinPath {
        minimum_sum,
        path,
        columns,
    }
}

/// Rows must be shape-valid and non-empty.
fn fill_tables(rows: &[Vec<i32>]) -> (MinSumTable, DirectionTable) {
    let height = rows.len();
    let _span = tracing::trace_span!("fill_tables", height).entered();

    let mut sums = MinSumTable::new(height);
    let mut directions = DirectionTable::new(height);

    let Some(base) = rows.last() else {
        return (sums, directions);
    };
    for (col, &value) in base.iter().enumerate() {
        sums.set(height - 1, col, i64::from(value));
    }

    for row in (0..height - 1).rev() {
        for (col, &value) in rows[row].iter().enumerate() {
            let down = sums.at(row + 1, col);
            let right = sums.at(row + 1, col + 1);
            // Strict comparison: ties go down.
            if right < down {
                sums.set(row, col, i64::from(value) + right);
                directions.set(row, col, true);
            } else {
                sums.set(row, col, i64::from(value) + down);
                directions.set(row, col, false);
            }
        }
    }

    (sums, directions)
}

fn reconstruct(rows: &[Vec<i32>], directions: &DirectionTable) -> (Vec<i32>, Vec<usize>) {
    let height = rows.len();
    let mut path = Vec::with_capacity(height);
    let mut columns = Vec::with_capacity(height);

    let mut col = 0usize;
    for row in 0..height - 1 {
        path.push(rows[row][col]);
        columns.push(col);
        if directions.at(row, col) {
            col += 1;
        }
    }
    path.push(rows[height - 1][col]);
    columns.push(col);

    (path, columns)
}
