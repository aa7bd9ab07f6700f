//! Discrete Vector Normalisation and Merging

use crate::error::{check_length, OracleError};
use std::collections::HashMap;

/// A vector of dense state codes in `0..num_states`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discretized {
    codes: Vec<usize>,
    num_states: usize,
}

impl Discretized {
    /// Relabel raw codes to `0..n`, numbering states by first occurrence.
    ///
    /// Distinct input values always map to distinct states, so the mapping is
    /// a bijection between the observed values and `0..num_states`.
    pub fn from_values(values: &[f64]) -> Result<Self, OracleError> {
        let mut lookup: HashMap<u64, usize> = HashMap::new();
        let mut codes = Vec::with_capacity(values.len());

        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(OracleError::NonFinite { index, value });
            }
            // -0.0 and 0.0 are the same label
            let key = if value == 0.0 { 0 } else { value.to_bits() };
            let next = lookup.len();
            codes.push(*lookup.entry(key).or_insert(next));
        }

        Ok(Self {
            codes,
            num_states: lookup.len(),
        })
    }

    /// Pair two variables into a single joint variable.
    ///
    /// Every distinct `(first, second)` pair gets its own state, numbered by
    /// first occurrence, so the result never has more states than samples.
    pub fn merge(first: &Self, second: &Self) -> Result<Self, OracleError> {
        check_length(first.len(), second.len())?;

        let mut lookup: HashMap<(usize, usize), usize> = HashMap::new();
        let codes = first
            .codes
            .iter()
            .zip(&second.codes)
            .map(|(&a, &b)| {
                let next = lookup.len();
                *lookup.entry((a, b)).or_insert(next)
            })
            .collect();

        Ok(Self {
            codes,
            num_states: lookup.len(),
        })
    }

    /// State code of every sample
    pub fn codes(&self) -> &[usize] {
        &self.codes
    }

    /// Number of distinct states observed
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the vector holds no samples
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// State codes as floating point values
    pub fn to_values(&self) -> Vec<f64> {
        self.codes.iter().map(|&c| c as f64).collect()
    }
}

/// Relabel a vector to canonical codes `0..n` in order of first occurrence
pub fn normalize_labels(values: &[f64]) -> Result<Vec<f64>, OracleError> {
    Ok(Discretized::from_values(values)?.to_values())
}

/// Merge two discrete vectors into one joint discrete vector
pub fn merge_discretized(first: &[f64], second: &[f64]) -> Result<Vec<f64>, OracleError> {
    check_length(first.len(), second.len())?;
    let first = Discretized::from_values(first)?;
    let second = Discretized::from_values(second)?;
    Ok(Discretized::merge(&first, &second)?.to_values())
}
