//! Weighted Entropy and Mutual Information
//!
//! Every statistic is estimated from empirical state frequencies. In the
//! weighted variants each state's term is additionally scaled by the mean
//! weight of the samples that fall into that state, so a weight vector of
//! all ones gives exactly the unweighted value.
//!
//! All results are in bits.

use crate::discrete::Discretized;
use crate::error::{check_length, OracleError};

const LN_2: f64 = std::f64::consts::LN_2;

/// Empirical probability and mean sample weight of each state
struct StateDistribution {
    prob: Vec<f64>,
    weight: Vec<f64>,
}

impl StateDistribution {
    fn estimate(var: &Discretized, weights: Option<&[f64]>) -> Self {
        let n = var.len() as f64;
        let mut counts = vec![0usize; var.num_states()];
        let mut weight_sums = vec![0.0; var.num_states()];

        for (i, &state) in var.codes().iter().enumerate() {
            counts[state] += 1;
            if let Some(w) = weights {
                weight_sums[state] += w[i];
            }
        }

        let prob = counts.iter().map(|&c| c as f64 / n).collect();
        let weight = match weights {
            Some(_) => counts
                .iter()
                .zip(&weight_sums)
                .map(|(&c, &sum)| if c > 0 { sum / c as f64 } else { 0.0 })
                .collect(),
            None => vec![1.0; var.num_states()],
        };

        Self { prob, weight }
    }

    fn states(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.prob
            .iter()
            .zip(&self.weight)
            .enumerate()
            .filter(|(_, (&p, _))| p > 0.0)
            .map(|(s, (&p, &w))| (s, p, w))
    }
}

/// Joint distribution of two variables with both marginals
struct JointDistribution {
    joint: StateDistribution,
    first: StateDistribution,
    second: StateDistribution,
    first_of: Vec<usize>,
    second_of: Vec<usize>,
}

impl JointDistribution {
    fn estimate(
        first: &Discretized,
        second: &Discretized,
        weights: Option<&[f64]>,
    ) -> Result<Self, OracleError> {
        let joint = Discretized::merge(first, second)?;

        let mut first_of = vec![0; joint.num_states()];
        let mut second_of = vec![0; joint.num_states()];
        for ((&j, &a), &b) in joint.codes().iter().zip(first.codes()).zip(second.codes()) {
            first_of[j] = a;
            second_of[j] = b;
        }

        Ok(Self {
            joint: StateDistribution::estimate(&joint, weights),
            first: StateDistribution::estimate(first, weights),
            second: StateDistribution::estimate(second, weights),
            first_of,
            second_of,
        })
    }
}

fn discretize(values: &[f64], n: usize) -> Result<Discretized, OracleError> {
    check_length(n, values.len())?;
    Discretized::from_values(values)
}

fn check_weights(n: usize, weights: Option<&[f64]>) -> Result<(), OracleError> {
    if n == 0 {
        return Err(OracleError::Empty);
    }
    if let Some(w) = weights {
        check_length(n, w.len())?;
        if let Some((index, &value)) = w.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(OracleError::NonFinite { index, value });
        }
    }
    Ok(())
}

fn entropy_of(var: &Discretized, weights: Option<&[f64]>) -> f64 {
    let dist = StateDistribution::estimate(var, weights);
    let mut h = 0.0;
    for (_, p, w) in dist.states() {
        h -= w * p * p.ln();
    }
    h / LN_2
}

/// H(target | condition)
fn conditional_entropy_of(
    target: &Discretized,
    condition: &Discretized,
    weights: Option<&[f64]>,
) -> Result<f64, OracleError> {
    let dist = JointDistribution::estimate(target, condition, weights)?;
    let mut h = 0.0;
    for (s, p, w) in dist.joint.states() {
        let p_condition = dist.second.prob[dist.second_of[s]];
        h -= w * p * (p / p_condition).ln();
    }
    Ok(h / LN_2)
}

fn mutual_information_of(
    first: &Discretized,
    second: &Discretized,
    weights: Option<&[f64]>,
) -> Result<f64, OracleError> {
    let dist = JointDistribution::estimate(first, second, weights)?;
    let mut mi = 0.0;
    for (s, p, w) in dist.joint.states() {
        let p_first = dist.first.prob[dist.first_of[s]];
        let p_second = dist.second.prob[dist.second_of[s]];
        mi += w * p * (p / (p_first * p_second)).ln();
    }
    // Rounding can leave independent variables slightly negative
    Ok((mi / LN_2).max(0.0))
}

/// I(first; target | condition) = H(first | condition) - H(first | target, condition)
fn conditional_mutual_information_of(
    first: &Discretized,
    target: &Discretized,
    condition: &Discretized,
    weights: Option<&[f64]>,
) -> Result<f64, OracleError> {
    let target_and_condition = Discretized::merge(target, condition)?;
    let h_given_condition = conditional_entropy_of(first, condition, weights)?;
    let h_given_both = conditional_entropy_of(first, &target_and_condition, weights)?;
    Ok((h_given_condition - h_given_both).max(0.0))
}

fn entropy_impl(values: &[f64], weights: Option<&[f64]>) -> Result<f64, OracleError> {
    check_weights(values.len(), weights)?;
    Ok(entropy_of(&Discretized::from_values(values)?, weights))
}

fn joint_entropy_impl(
    first: &[f64],
    second: &[f64],
    weights: Option<&[f64]>,
) -> Result<f64, OracleError> {
    let n = first.len();
    check_weights(n, weights)?;
    let joint = Discretized::merge(&discretize(first, n)?, &discretize(second, n)?)?;
    Ok(entropy_of(&joint, weights))
}

fn conditional_entropy_impl(
    target: &[f64],
    condition: &[f64],
    weights: Option<&[f64]>,
) -> Result<f64, OracleError> {
    let n = target.len();
    check_weights(n, weights)?;
    conditional_entropy_of(&discretize(target, n)?, &discretize(condition, n)?, weights)
}

fn mutual_information_impl(
    first: &[f64],
    second: &[f64],
    weights: Option<&[f64]>,
) -> Result<f64, OracleError> {
    let n = first.len();
    check_weights(n, weights)?;
    mutual_information_of(&discretize(first, n)?, &discretize(second, n)?, weights)
}

fn conditional_mutual_information_impl(
    first: &[f64],
    target: &[f64],
    condition: &[f64],
    weights: Option<&[f64]>,
) -> Result<f64, OracleError> {
    let n = first.len();
    check_weights(n, weights)?;
    conditional_mutual_information_of(
        &discretize(first, n)?,
        &discretize(target, n)?,
        &discretize(condition, n)?,
        weights,
    )
}

/// Shannon entropy H(X)
pub fn entropy(values: &[f64]) -> Result<f64, OracleError> {
    entropy_impl(values, None)
}

/// Weighted entropy H_w(X)
pub fn weighted_entropy(values: &[f64], weights: &[f64]) -> Result<f64, OracleError> {
    entropy_impl(values, Some(weights))
}

/// Joint entropy H(X, Y)
pub fn joint_entropy(first: &[f64], second: &[f64]) -> Result<f64, OracleError> {
    joint_entropy_impl(first, second, None)
}

/// Weighted joint entropy H_w(X, Y)
pub fn weighted_joint_entropy(
    first: &[f64],
    second: &[f64],
    weights: &[f64],
) -> Result<f64, OracleError> {
    joint_entropy_impl(first, second, Some(weights))
}

/// Conditional entropy H(X | Y)
pub fn conditional_entropy(target: &[f64], condition: &[f64]) -> Result<f64, OracleError> {
    conditional_entropy_impl(target, condition, None)
}

/// Weighted conditional entropy H_w(X | Y)
pub fn weighted_conditional_entropy(
    target: &[f64],
    condition: &[f64],
    weights: &[f64],
) -> Result<f64, OracleError> {
    conditional_entropy_impl(target, condition, Some(weights))
}

/// Mutual information I(X; Y)
pub fn mutual_information(first: &[f64], second: &[f64]) -> Result<f64, OracleError> {
    mutual_information_impl(first, second, None)
}

/// Weighted mutual information I_w(X; Y)
pub fn weighted_mutual_information(
    first: &[f64],
    second: &[f64],
    weights: &[f64],
) -> Result<f64, OracleError> {
    mutual_information_impl(first, second, Some(weights))
}

/// Conditional mutual information I(X; Y | Z)
pub fn conditional_mutual_information(
    first: &[f64],
    target: &[f64],
    condition: &[f64],
) -> Result<f64, OracleError> {
    conditional_mutual_information_impl(first, target, condition, None)
}

/// Weighted conditional mutual information I_w(X; Y | Z)
pub fn weighted_conditional_mutual_information(
    first: &[f64],
    target: &[f64],
    condition: &[f64],
    weights: &[f64],
) -> Result<f64, OracleError> {
    conditional_mutual_information_impl(first, target, condition, Some(weights))
}
