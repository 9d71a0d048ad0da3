//! # Minimum-sum paths through numeric triangles
//!
//! A triangle is a jagged array where row `r` holds exactly `r + 1` integers.
//! A path starts at the apex and, from cell `(r, c)`, steps to either
//! `(r + 1, c)` or `(r + 1, c + 1)` until it reaches the base row.
//!
//! ## Core Algorithm
//!
//! 1. **Base case**: the bottom row of the sum table is the base row itself
//! 2. **Bottom-up tabulation**: each cell adds the smaller of its two successor sums
//! 3. **Decision table**: one bit per cell records whether the right successor won
//! 4. **Reconstruction**: follow the recorded bits from the apex down
//!
//! Ties always step straight down, so the reconstructed path is reproducible.
//!
//! ## Usage Example
//!
//! ```
//! use tripath::{find_minimum_path, Triangle};
//!
//! let triangle = Triangle::new(vec![vec![2], vec![3, 4], vec![6, 5, 7], vec![4, 1, 8, 3]])?;
//! let result = find_minimum_path(&triangle);
//! assert_eq!(result.minimum_sum(), 11);
//! assert_eq!(result.path(), &[2, 3, 5, 1]);
//! # Ok::<(), tripath::ShapeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod input;    // Bracketed text parsing and the retry prompt loop
pub mod render;   // Human-readable result output
pub mod solver;   // Bottom-up DP and path reconstruction
pub mod triangle; // Shape-validated triangle model

// Re-exports for convenience
pub use input::{
    parse_triangle, parse_triangle_with, ParseError, ReadError, ReaderConfig, TriangleReader,
};
pub use render::{format_path, render_report, write_report, ARROW};
pub use solver::{
    find_minimum_path, find_minimum_path_in, tabulate, DirectionTable, MinPath, MinSumTable,
};
pub use triangle::{ShapeError, Triangle};
