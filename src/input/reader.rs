use std::io::{self, BufRead, Write};

use thiserror::Error;

use super::{parse_triangle_with, ReaderConfig};
use crate::triangle::Triangle;

/// Errors that end an interactive read.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Reading the input or writing the prompt failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// Input closed before a valid triangle was entered.
    #[error("input ended before a valid triangle was entered")]
    EndOfInput,

    /// Every allowed attempt was rejected.
    #[error("no valid triangle after {attempts} attempts")]
    Exhausted {
        /// Number of rejected lines.
        attempts: usize,
    },
}

/// Prompts for a triangle and re-prompts on malformed input.
///
/// Each call to [`TriangleReader::read_triangle`] starts a fresh attempt
/// count.
#[derive(Debug)]
pub struct TriangleReader<R, W> {
    input: R,
    output: W,
    config: ReaderConfig,
}

impl<R: BufRead, W: Write> TriangleReader<R, W> {
    /// Create a reader with the default configuration.
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, ReaderConfig::default())
    }

    /// Create a reader with an explicit configuration.
    pub fn with_config(input: R, output: W, config: ReaderConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Prompt until a line parses into a triangle.
    pub fn read_triangle(&mut self) -> Result<Triangle, ReadError> {
        let mut attempts = 0usize;
        let mut line = String::new();

        loop {
            if let Some(max) = self.config.max_attempts {
                if attempts >= max {
                    return Err(ReadError::Exhausted { attempts });
                }
            }

            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ReadError::EndOfInput);
            }

            match parse_triangle_with(&line, &self.config) {
                Ok(triangle) => {
                    tracing::debug!(attempts, height = triangle.height(), "accepted triangle");
                    return Ok(triangle);
                }
                Err(err) => {
                    attempts += 1;
                    tracing::warn!(attempt = attempts, error = %err, "rejected triangle input");
                    writeln!(self.output, "Invalid triangle, please try again: {err}")?;
                }
            }
        }
    }

    /// Recover the underlying input and output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
