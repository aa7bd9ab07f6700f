//! Selector Contract and Shared Selection Steps

use crate::error::SelectionError;
use crate::view::FeatureView;
use info_oracle::InformationOracle;
use serde::{Deserialize, Serialize};
use std::time::Duration;
#[cfg(not(feature = "parallel"))]
use tracing::warn;

/// Greedy feature selection criterion
pub trait FeatureSelector: Send + Sync {
    /// Short identifier, e.g. `"cmim"`
    fn name(&self) -> &'static str;

    /// Select `k` distinct features in the order they were chosen
    fn select(
        &self,
        k: usize,
        view: &FeatureView<'_>,
        class: &[f64],
        weights: &[f64],
    ) -> Result<Selection, SelectionError>;

    /// Select `out.len()` features into a caller-owned buffer.
    ///
    /// `out` is only written once the whole selection has succeeded.
    fn select_into(
        &self,
        view: &FeatureView<'_>,
        class: &[f64],
        weights: &[f64],
        out: &mut [usize],
    ) -> Result<(), SelectionError> {
        let selection = self.select(out.len(), view, class, weights)?;
        out.copy_from_slice(&selection.features);
        Ok(())
    }
}

/// Outcome of a selection call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected feature indices, in selection order
    pub features: Vec<usize>,
    /// Criterion value that won each round
    pub scores: Vec<f64>,
    /// Oracle work performed
    pub stats: SelectionStats,
}

/// Counters describing how much oracle work a selection call performed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionStats {
    /// Feature/class mutual information evaluations
    pub mi_evaluations: usize,
    /// Conditional mutual information evaluations (CMIM)
    pub cmi_evaluations: usize,
    /// Symmetrical relevance cells computed (DISR)
    pub relevance_evaluations: usize,
    /// Symmetrical relevance cells served from the cache (DISR)
    pub relevance_cache_hits: usize,
    /// Rounds where no candidate scored above zero
    pub fallback_picks: usize,
}

impl SelectionStats {
    /// Total number of statistics requested from the oracle
    pub fn oracle_evaluations(&self) -> usize {
        self.mi_evaluations + self.cmi_evaluations + self.relevance_evaluations
    }
}

/// Index of the first strict maximum, or `None` for an empty slice
pub(crate) fn first_argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (j, &value) in values.iter().enumerate() {
        match best {
            Some((_, max)) if value <= max => {}
            _ => best = Some((j, value)),
        }
    }
    best.map(|(j, _)| j)
}

/// Fill `out[j]` with I(feature_j; class) for every feature
pub(crate) fn fill_class_relevance<O: InformationOracle>(
    oracle: &O,
    view: &FeatureView<'_>,
    class: &[f64],
    weights: &[f64],
    parallel: bool,
    out: &mut [f64],
) -> Result<(), SelectionError> {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return out
            .par_iter_mut()
            .enumerate()
            .try_for_each(|(j, slot)| -> Result<(), SelectionError> {
                *slot = oracle.mutual_information(view.column(j), class, weights)?;
                Ok(())
            });
    }

    #[cfg(not(feature = "parallel"))]
    if parallel {
        warn!("Parallel selection requested without the `parallel` feature, running sequentially");
    }

    for (j, slot) in out.iter_mut().enumerate() {
        *slot = oracle.mutual_information(view.column(j), class, weights)?;
    }
    Ok(())
}

/// Publish per-call counters
pub(crate) fn record_metrics(algorithm: &'static str, stats: &SelectionStats, elapsed: Duration) {
    metrics::counter!("fselect_selections_total", "algorithm" => algorithm).increment(1);
    metrics::counter!("fselect_oracle_evaluations_total", "algorithm" => algorithm)
        .increment(stats.oracle_evaluations() as u64);
    metrics::histogram!("fselect_selection_seconds", "algorithm" => algorithm)
        .record(elapsed.as_secs_f64());
}
