use bitvec::prelude::*;

/// Offset of row `row` in a flat triangular layout.
#[inline]
fn row_offset(row: usize) -> usize {
    row * (row + 1) / 2
}

/// Number of cells in a triangle of `height` rows.
#[inline]
fn cell_count(height: usize) -> usize {
    row_offset(height)
}

/// Minimum sum from each cell down to the base row.
///
/// Only cells with `col <= row` exist; they are stored row after row in a
/// single allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinSumTable {
    height: usize,
    sums: Vec<i64>,
}

impl MinSumTable {
    pub(crate) fn new(height: usize) -> Self {
        Self {
            height,
            sums: vec![0; cell_count(height)],
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Minimum achievable sum from `(row, col)` to the base row.
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row >= self.height || col > row {
            return None;
        }
        Some(self.sums[row_offset(row) + col])
    }

    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> i64 {
        debug_assert!(row < self.height && col <= row);
        self.sums[row_offset(row) + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: i64) {
        debug_assert!(row < self.height && col <= row);
        self.sums[row_offset(row) + col] = value;
    }
}

/// Per-cell choice of successor: `true` steps to `(row + 1, col + 1)`,
/// `false` to `(row + 1, col)`.
///
/// Base-row cells have no successor and always read `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionTable {
    height: usize,
    bits: BitVec,
}

impl DirectionTable {
    pub(crate) fn new(height: usize) -> Self {
        Self {
            height,
            bits: bitvec![0; cell_count(height)],
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the optimal continuation from `(row, col)` steps right.
    pub fn steps_right(&self, row: usize, col: usize) -> Option<bool> {
        if row >= self.height || col > row {
            return None;
        }
        Some(self.bits[row_offset(row) + col])
    }

    /// Number of cells whose decision is "right".
    pub fn right_count(&self) -> usize {
        self.bits.count_ones()
    }

    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < self.height && col <= row);
        self.bits[row_offset(row) + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, right: bool) {
        debug_assert!(row < self.height && col <= row);
        self.bits.set(row_offset(row) + col, right);
    }
}
