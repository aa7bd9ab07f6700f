//! Oracle Error Types

use thiserror::Error;

/// Errors raised while estimating information statistics
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OracleError {
    /// Two vectors that must describe the same samples differ in length
    #[error("Vector length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A code or weight is NaN or infinite
    #[error("Non-finite value {value} at index {index}")]
    NonFinite { index: usize, value: f64 },

    /// No samples to estimate from
    #[error("Cannot estimate statistics from an empty vector")]
    Empty,
}

/// Check that a vector has the expected number of samples
pub(crate) fn check_length(expected: usize, actual: usize) -> Result<(), OracleError> {
    if expected != actual {
        Err(OracleError::LengthMismatch { expected, actual })
    } else {
        Ok(())
    }
}
