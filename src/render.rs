//! Human-readable output for solved triangles.

use std::io::{self, Write};

use crate::solver::MinPath;

/// Separator placed between consecutive path values.
pub const ARROW: &str = " → ";

/// Join path values with [`ARROW`].
pub fn format_path(path: &[i32]) -> String {
    path.iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(ARROW)
}

/// Write the full report: a heading, the path and the minimum sum.
pub fn write_report<W: Write>(writer: &mut W, result: &MinPath) -> io::Result<()> {
    writeln!(writer, "Result")?;
    writeln!(writer, "Minimum path: {}", format_path(result.path()))?;
    writeln!(writer, "Minimum sum: {}", result.minimum_sum())?;
    writer.flush()
}

/// Render the report into a string (useful for tests and snapshots).
pub fn render_report(result: &MinPath) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_report(&mut buffer, result)?;
    String::from_utf8(buffer).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
