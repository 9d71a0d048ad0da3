/// Prompt shown before each interactive read.
pub const DEFAULT_PROMPT: &str = "Enter a triangle (e.g. [[2],[3,4],[6,5,7],[4,1,8,3]]): ";

/// Configuration parameters for parsing and interactive reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Fewest rows accepted from text input.
    pub min_rows: usize,

    /// Give up after this many rejected lines (`None` retries forever).
    pub max_attempts: Option<usize>,

    /// Text written before each read.
    pub prompt: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            min_rows: 2,
            max_attempts: None,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl ReaderConfig {
    /// Set the minimum row count (clamped to at least 1).
    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = min_rows.max(1);
        self
    }

    /// Set the attempt limit for the interactive loop.
    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Replace the prompt text.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}
