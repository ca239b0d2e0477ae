// File: crates/tufte-core/src/error.rs
// Summary: Error taxonomy shared by tick, table and summary helpers.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TufteError {
    /// Empty data, inverted or non-finite range, unknown format name, mismatched lengths.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Integral and floating-point values mixed in one series.
    #[error("unsupported data shape: only pure integer or pure float series are supported")]
    UnsupportedDataShape,
    #[error("render failed: {0}")]
    Render(String),
}

impl TufteError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, TufteError>;
