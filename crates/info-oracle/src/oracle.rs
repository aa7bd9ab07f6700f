//! Information Oracle Trait and Implementations

use crate::discrete;
use crate::error::OracleError;
use crate::weighted;

/// Source of the information statistics consumed by feature selectors.
///
/// Implementations must be pure: the same inputs always give the same
/// result, so callers are free to cache anything an oracle returns.
pub trait InformationOracle: Send + Sync {
    /// I(first; second), in bits
    fn mutual_information(
        &self,
        first: &[f64],
        second: &[f64],
        weights: &[f64],
    ) -> Result<f64, OracleError>;

    /// I(first; target | condition), in bits
    fn conditional_mutual_information(
        &self,
        first: &[f64],
        target: &[f64],
        condition: &[f64],
        weights: &[f64],
    ) -> Result<f64, OracleError>;

    /// H(first, second), in bits
    fn joint_entropy(
        &self,
        first: &[f64],
        second: &[f64],
        weights: &[f64],
    ) -> Result<f64, OracleError>;

    /// Relabel to canonical codes `0..n` in order of first occurrence
    fn normalize_labels(&self, values: &[f64]) -> Result<Vec<f64>, OracleError> {
        discrete::normalize_labels(values)
    }

    /// Merge two discrete vectors into one joint discrete vector
    fn merge(&self, first: &[f64], second: &[f64]) -> Result<Vec<f64>, OracleError> {
        discrete::merge_discretized(first, second)
    }
}

impl<O: InformationOracle + ?Sized> InformationOracle for &O {
    fn mutual_information(
        &self,
        first: &[f64],
        second: &[f64],
        weights: &[f64],
    ) -> Result<f64, OracleError> {
        (**self).mutual_information(first, second, weights)
    }

    fn conditional_mutual_information(
        &self,
        first: &[f64],
        target: &[f64],
        condition: &[f64],
        weights: &[f64],
    ) -> Result<f64, OracleError> {
        (**self).conditional_mutual_information(first, target, condition, weights)
    }

    fn joint_entropy(
        &self,
        first: &[f64],
        second: &[f64],
        weights: &[f64],
    ) -> Result<f64, OracleError> {
        (**self).joint_entropy(first, second, weights)
    }

    fn normalize_labels(&self, values: &[f64]) -> Result<Vec<f64>, OracleError> {
        (**self).normalize_labels(values)
    }

    fn merge(&self, first: &[f64], second: &[f64]) -> Result<Vec<f64>, OracleError> {
        (**self).merge(first, second)
    }
}

/// Oracle that scales every state by the mean weight of its samples
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedOracle;

impl InformationOracle for WeightedOracle {
    fn mutual_information(
        &self,
        first: &[f64],
        second: &[f64],
        weights: &[f64],
    ) -> Result<f64, OracleError> {
        weighted::weighted_mutual_information(first, second, weights)
    }

    fn conditional_mutual_information(
        &self,
        first: &[f64],
        target: &[f64],
        condition: &[f64],
        weights: &[f64],
    ) -> Result<f64, OracleError> {
        weighted::weighted_conditional_mutual_information(first, target, condition, weights)
    }

    fn joint_entropy(
        &self,
        first: &[f64],
        second: &[f64],
        weights: &[f64],
    ) -> Result<f64, OracleError> {
        weighted::weighted_joint_entropy(first, second, weights)
    }
}

/// Oracle that ignores the weight vector
#[derive(Debug, Clone, Copy, Default)]
pub struct UnweightedOracle;

impl InformationOracle for UnweightedOracle {
    fn mutual_information(
        &self,
        first: &[f64],
        second: &[f64],
        _weights: &[f64],
    ) -> Result<f64, OracleError> {
        weighted::mutual_information(first, second)
    }

    fn conditional_mutual_information(
        &self,
        first: &[f64],
        target: &[f64],
        condition: &[f64],
        _weights: &[f64],
    ) -> Result<f64, OracleError> {
        weighted::conditional_mutual_information(first, target, condition)
    }

    fn joint_entropy(
        &self,
        first: &[f64],
        second: &[f64],
        _weights: &[f64],
    ) -> Result<f64, OracleError> {
        weighted::joint_entropy(first, second)
    }
}
