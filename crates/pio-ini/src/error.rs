//! Error types for pio-ini

/// Result type for pio-ini operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Malformed source text; `line` is 1-based.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl Error {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Line the error was reported on.
    pub fn line(&self) -> usize {
        match self {
            Self::Parse { line, .. } => *line,
        }
    }
}
