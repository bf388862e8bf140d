//! Report error types.

use thiserror::Error;

use crate::severity::SeverityCode;

/// A diagnostic carried a severity code outside `{0, 1, 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("Unknown severity code: {code}")]
pub struct UnknownSeverity {
    /// The rejected code.
    pub code: SeverityCode,
}

/// Reasons an entry activation is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The reference was minted before the view was last regenerated.
    #[error("Stale entry reference: generation {found}, current is {current}")]
    Stale { found: u64, current: u64 },

    /// The index does not name an entry of the current listing.
    #[error("Entry index {index} out of range (listing has {len} entries)")]
    OutOfRange { index: usize, len: usize },
}

/// Errors that can occur while loading input or configuration.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed lint result input.
    #[error("Input error: {0}")]
    Input(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rejected selection.
    #[error("Selection error: {0}")]
    Selection(#[from] SelectError),
}

impl ReportError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an input error.
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }
}
