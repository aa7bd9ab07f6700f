//! Selection Error Types

use info_oracle::OracleError;
use thiserror::Error;

/// Errors that abort a selection call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    /// Requested more features than exist, or none at all
    #[error("Cannot select {k} features: k must be in [1, {n_features}]")]
    InvalidK { k: usize, n_features: usize },

    /// Feature matrix has zero rows
    #[error("Feature matrix has no samples")]
    NoSamples,

    /// An input vector does not match the number of samples
    #[error("{what} length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Weight is negative, NaN or infinite
    #[error("Invalid weight {value} for sample {index}")]
    InvalidWeight { index: usize, value: f64 },

    /// Matrix view whose columns are not contiguous in memory
    #[error("Feature matrix columns must be contiguous (column-major layout)")]
    NonContiguousColumns,

    /// Scratch space for a selection call could not be allocated
    #[error("Failed to allocate {requested} elements for {what}")]
    Allocation {
        what: &'static str,
        requested: usize,
    },

    /// Unrecognised algorithm name
    #[error("Unknown selection algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Information oracle failure, passed through unchanged
    #[error("Information oracle failed: {0}")]
    Oracle(#[from] OracleError),
}
