//! Error types for holdings processing.
//!
//! Only structural failures are errors. A weight that cannot be read as a
//! number is recorded as absent on the record, and an export with no
//! matching securities produces empty views rather than an error.

use thiserror::Error;

/// Result type for holdings operations.
pub type HoldingsResult<T> = Result<T, HoldingsError>;

/// Errors that can occur while loading or parsing a holdings export.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoldingsError {
    /// The byte stream is not a parseable table or has the wrong shape.
    #[error("Parse error{}: {reason}", .row.map(|r| format!(" at row {r}")).unwrap_or_default())]
    Parse {
        /// 1-based row where the failure was detected, if known.
        row: Option<u64>,
        /// The original failure detail.
        reason: String,
    },

    /// The holdings source could not be read.
    #[error("Failed to read holdings from {path}: {reason}")]
    Io {
        /// Description of the source (usually a file path).
        path: String,
        /// The underlying I/O failure.
        reason: String,
    },

    /// Aggregation configuration was rejected.
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value is invalid.
        reason: String,
    },
}

impl HoldingsError {
    /// Create a parse error without a row position.
    #[must_use]
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            row: None,
            reason: reason.into(),
        }
    }

    /// Create a parse error at a 1-based row.
    #[must_use]
    pub fn parse_at(row: u64, reason: impl Into<String>) -> Self {
        Self::Parse {
            row: Some(row),
            reason: reason.into(),
        }
    }

    /// Create an I/O error.
    #[must_use]
    pub fn io(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this is a parse failure.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<csv::Error> for HoldingsError {
    fn from(err: csv::Error) -> Self {
        let row = err.position().map(csv::Position::line);
        Self::Parse {
            row,
            reason: err.to_string(),
        }
    }
}
