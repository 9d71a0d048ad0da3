//! Shared helpers for integration tests

#![allow(dead_code)]

use proptest::prelude::*;

/// Build rows from slice literals.
pub fn rows(literal: &[&[i32]]) -> Vec<Vec<i32>> {
    literal.iter().map(|row| row.to_vec()).collect()
}

/// Minimum path sum by enumerating every apex-to-base path.
///
/// There are `2^(height-1)` paths; keep heights small.
pub fn brute_force_min(rows: &[Vec<i32>]) -> i64 {
    if rows.is_empty() {
        return 0;
    }
    let steps = rows.len() - 1;
    (0u32..1 << steps)
        .map(|mask| {
            let mut col = 0usize;
            let mut total = i64::from(rows[0][0]);
            for row in 1..rows.len() {
                if mask & (1 << (row - 1)) != 0 {
                    col += 1;
                }
                total += i64::from(rows[row][col]);
            }
            total
        })
        .min()
        .unwrap_or(0)
}

/// Strategy producing shape-valid triangles of `1..=max_height` rows.
pub fn triangle_rows(max_height: usize, values: i32) -> impl Strategy<Value = Vec<Vec<i32>>> {
    (1..=max_height).prop_flat_map(move |height| {
        (0..height)
            .map(|row| proptest::collection::vec(-values..=values, row + 1))
            .collect::<Vec<_>>()
    })
}
