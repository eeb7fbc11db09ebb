//! Error types for strands.
//!
//! Splitting itself never fails: blank input yields an empty thread and any
//! limit is clamped into range. Errors only come from the surfaces around
//! the engine (configuration, file import, clipboard).

use std::path::PathBuf;

use crate::BudgetError;

/// Errors raised by the collaborators around the splitter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A budget could not be configured.
    #[error(transparent)]
    InvalidBudget(#[from] BudgetError),

    /// An imported file does not hold plain text.
    #[error("{path} is not a plain-text file")]
    NotText {
        /// The rejected file.
        path: PathBuf,
    },

    /// Reading an imported file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A clipboard tier could not take the text.
    #[error("clipboard tier `{tier}` failed: {reason}")]
    Clipboard {
        /// Name of the tier that failed.
        tier: &'static str,
        /// What went wrong.
        reason: String,
    },
}

/// Result type for strands operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_error_converts() {
        let err: Error = crate::Budget::new(280).with_floor(0).unwrap_err().into();
        assert!(matches!(err, Error::InvalidBudget(BudgetError::ZeroFloor)));
        assert_eq!(err.to_string(), "floor must be > 0");
    }
}
