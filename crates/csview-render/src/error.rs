//! Error types for CSV ingestion.

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors that abort ingestion. No partial model is ever returned.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The tokenizer rejected the input.
    #[error("{}", malformed_message(.line, .message))]
    Malformed {
        /// 1-based input line where the tokenizer gave up, when known.
        line: Option<u64>,
        /// The tokenizer's own diagnostic.
        message: String,
    },

    /// Reading the underlying stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Growing the row buffer failed.
    #[error("out of memory while buffering rows: {0}")]
    OutOfMemory(#[from] TryReserveError),
}

fn malformed_message(line: &Option<u64>, message: &str) -> String {
    match line {
        Some(line) => format!("error parsing CSV at line {}: {}", line, message),
        None => format!("error parsing CSV: {}", message),
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line());
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => IngestError::Io(io),
            _ => IngestError::Malformed { line, message },
        }
    }
}

/// Result type for ingestion.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_includes_line() {
        let err = IngestError::Malformed {
            line: Some(3),
            message: "bad quote".into(),
        };
        assert_eq!(err.to_string(), "error parsing CSV at line 3: bad quote");
    }

    #[test]
    fn malformed_message_without_line() {
        let err = IngestError::Malformed {
            line: None,
            message: "bad quote".into(),
        };
        assert_eq!(err.to_string(), "error parsing CSV: bad quote");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err = IngestError::from(csv::Error::from(io));
        assert!(matches!(err, IngestError::Io(_)));
    }
}
