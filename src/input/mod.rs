//! Textual triangle input
//!
//! Triangles are written as nested bracket lists, e.g.
//! `[[2],[3,4],[6,5,7],[4,1,8,3]]`. Whitespace around brackets, commas and
//! numbers is ignored.

mod config;
mod reader;

pub use config::{ReaderConfig, DEFAULT_PROMPT};
pub use reader::{ReadError, TriangleReader};

use thiserror::Error;

use crate::triangle::{ShapeError, Triangle};

/// Errors raised while turning text into a [`Triangle`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing but whitespace was supplied.
    #[error("empty input")]
    Empty,

    /// Input is not wrapped in `[[` and `]]`.
    #[error("expected the form [[2],[3,4],...]")]
    MissingBrackets,

    /// Nothing between the outer brackets.
    #[error("triangle has no rows")]
    NoRows,

    /// Row separators are not `],[`.
    #[error("malformed brackets before row {row}")]
    MalformedRow {
        /// Zero-based index of the row that could not be delimited.
        row: usize,
    },

    /// Fewer rows than the configured minimum.
    #[error("triangle must have at least {minimum} rows, found {found}")]
    TooFewRows {
        /// Rows found in the input.
        found: usize,
        /// Configured minimum.
        minimum: usize,
    },

    /// A token is not a 32-bit integer.
    #[error("invalid number '{token}' in row {row}")]
    InvalidNumber {
        /// Zero-based row index.
        row: usize,
        /// Offending token, trimmed.
        token: String,
    },

    /// Rows parsed but do not form a triangle.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Parse a triangle literal with the default configuration.
pub fn parse_triangle(text: &str) -> Result<Triangle, ParseError> {
    parse_triangle_with(text, &ReaderConfig::default())
}

/// Parse a triangle literal.
pub fn parse_triangle_with(text: &str, config: &ReaderConfig) -> Result<Triangle, ParseError> {
    let rows = parse_rows(text)?;
    if rows.len() < config.min_rows {
        return Err(ParseError::TooFewRows {
            found: rows.len(),
            minimum: config.min_rows,
        });
    }
    Ok(Triangle::new(rows)?)
}

/// Split the literal into integer rows without checking the triangle shape.
fn parse_rows(text: &str) -> Result<Vec<Vec<i32>>, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let inner = text
        .strip_prefix('[')
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('['))
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim_end)
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(ParseError::MissingBrackets)?
        .trim();
    if inner.is_empty() {
        return Err(ParseError::NoRows);
    }

    // "2],[3,4],[6,5,7" splits into one segment per row; all but the first
    // must open with ",[".
    let mut rows = Vec::new();
    for (row, segment) in inner.split(']').enumerate() {
        let body = if row == 0 {
            segment
        } else {
            segment
                .trim_start()
                .strip_prefix(',')
                .map(str::trim_start)
                .and_then(|rest| rest.strip_prefix('['))
                .ok_or(ParseError::MalformedRow { row })?
        };
        if body.contains('[') {
            return Err(ParseError::MalformedRow { row });
        }
        rows.push(parse_values(body, row)?);
    }

    tracing::trace!(rows = rows.len(), "parsed triangle literal");
    Ok(rows)
}

fn parse_values(body: &str, row: usize) -> Result<Vec<i32>, ParseError> {
    body.split(',')
        .map(str::trim)
        .map(|token| {
            token.parse::<i32>().map_err(|_| ParseError::InvalidNumber {
                row,
                token: token.to_string(),
            })
        })
        .collect()
}
