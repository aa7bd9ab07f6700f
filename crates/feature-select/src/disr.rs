//! Double Input Symmetrical Relevance
//!
//! Meyer and Bontempi's DISR criterion ("On the Use of Variable
//! Complementarity for Feature Selection in Cancer Classification", 2006)
//! over weighted mutual information.
//!
//! A candidate's score in round `i` is the sum, over every feature chosen in
//! an earlier round, of the symmetrical relevance of the merged pair with the
//! label:
//!
//! ```text
//! SR(X_a X_b; Y) = I(X_a X_b; Y) / H(X_a X_b, Y)
//! ```
//!
//! Each pair term is computed at most once per call and cached, so a round
//! only evaluates the pairs formed with the previous round's winner.

use crate::arena;
use crate::error::SelectionError;
use crate::selector::{
    fill_class_relevance, first_argmax, record_metrics, FeatureSelector, Selection, SelectionStats,
};
use crate::validate::check_inputs;
use crate::view::FeatureView;
use info_oracle::{InformationOracle, WeightedOracle};
use std::time::Instant;
#[cfg(not(feature = "parallel"))]
use tracing::warn;
use tracing::{debug, info, trace};

/// DISR feature selector
#[derive(Debug, Clone, Default)]
pub struct Disr<O = WeightedOracle> {
    oracle: O,
    parallel: bool,
}

impl Disr {
    /// Create a DISR selector over weighted mutual information
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: InformationOracle> Disr<O> {
    /// Create a DISR selector backed by `oracle`
    pub fn with_oracle(oracle: O) -> Self {
        Self {
            oracle,
            parallel: false,
        }
    }

    /// Fill relevance cells for all candidates of a round in parallel
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The oracle statistics are requested from
    pub fn oracle(&self) -> &O {
        &self.oracle
    }
}

/// Write-once memo of pair relevances.
///
/// Logically a `rounds x features` table; stored feature-major so each
/// feature owns one contiguous run of `rounds` cells.
struct RelevanceCache {
    cells: Vec<Option<f64>>,
    rounds: usize,
}

impl RelevanceCache {
    fn new(rounds: usize, n_features: usize) -> Result<Self, SelectionError> {
        let len = arena::table_len("DISR relevance cache", rounds, n_features)?;
        Ok(Self {
            cells: arena::filled("DISR relevance cache", len, None)?,
            rounds,
        })
    }

    #[cfg(test)]
    fn get(&self, round: usize, feature: usize) -> Option<f64> {
        self.cells[feature * self.rounds + round]
    }
}

/// Inputs shared by every relevance evaluation of one call
struct PairContext<'a, O> {
    oracle: &'a O,
    view: &'a FeatureView<'a>,
    labels: &'a [f64],
    weights: &'a [f64],
}

impl<O: InformationOracle> PairContext<'_, O> {
    /// I(X_a X_b; Y) / H(X_a X_b, Y), or zero when the joint entropy vanishes
    fn symmetrical_relevance(&self, chosen: usize, candidate: usize) -> Result<f64, SelectionError> {
        let merged = self
            .oracle
            .merge(self.view.column(chosen), self.view.column(candidate))?;
        let mi = self.oracle.mutual_information(&merged, self.labels, self.weights)?;
        let joint_entropy = self.oracle.joint_entropy(&merged, self.labels, self.weights)?;

        if joint_entropy > 0.0 {
            Ok(mi / joint_entropy)
        } else {
            trace!(
                "Zero joint entropy for pair ({}, {}), relevance set to 0",
                chosen,
                candidate
            );
            Ok(0.0)
        }
    }

    /// Sum a candidate's relevance with every selected feature, filling
    /// missing cells. Returns the score and how many cells were computed.
    fn score_candidate(
        &self,
        selected: &[usize],
        candidate: usize,
        cells: &mut [Option<f64>],
    ) -> Result<(f64, usize), SelectionError> {
        let mut score = 0.0;
        let mut computed = 0;
        for (x, &chosen) in selected.iter().enumerate() {
            let relevance = match cells[x] {
                Some(r) => r,
                None => {
                    let r = self.symmetrical_relevance(chosen, candidate)?;
                    cells[x] = Some(r);
                    computed += 1;
                    r
                }
            };
            score += relevance;
        }
        Ok((score, computed))
    }
}

/// Caches, mask and output of one DISR call
struct DisrRun<'a, O> {
    pairs: PairContext<'a, O>,
    cache: RelevanceCache,
    selected: Vec<bool>,
    /// Per-round candidate scores and computed-cell counts, `None` if selected
    round_scores: Vec<Option<(f64, usize)>>,
    features: Vec<usize>,
    scores: Vec<f64>,
    stats: SelectionStats,
    parallel: bool,
}

impl<'a, O: InformationOracle> DisrRun<'a, O> {
    /// Round 0: pick the feature most relevant to the class
    fn start(
        oracle: &'a O,
        view: &'a FeatureView<'a>,
        class: &'a [f64],
        labels: &'a [f64],
        weights: &'a [f64],
        k: usize,
        parallel: bool,
    ) -> Result<Self, SelectionError> {
        let n_features = view.n_features();
        let mut class_mi = arena::filled("DISR class relevance", n_features, 0.0)?;
        let mut selected = arena::filled("DISR selection mask", n_features, false)?;
        let round_scores = arena::filled("DISR round scores", n_features, None)?;
        let cache = RelevanceCache::new(k, n_features)?;
        let mut features = arena::with_capacity("DISR output", k)?;
        let mut scores = arena::with_capacity("DISR output scores", k)?;

        fill_class_relevance(oracle, view, class, weights, parallel, &mut class_mi)?;
        let stats = SelectionStats {
            mi_evaluations: n_features,
            ..SelectionStats::default()
        };

        let first = first_argmax(&class_mi).ok_or(SelectionError::InvalidK { k, n_features })?;
        debug!("DISR round 0: feature {} (I = {:.6})", first, class_mi[first]);
        selected[first] = true;
        features.push(first);
        scores.push(class_mi[first]);

        Ok(Self {
            pairs: PairContext {
                oracle,
                view,
                labels,
                weights,
            },
            cache,
            selected,
            round_scores,
            features,
            scores,
            stats,
            parallel,
        })
    }

    /// Score every unselected candidate against the features chosen so far
    fn score_round(&mut self) -> Result<(), SelectionError> {
        let rounds = self.cache.rounds;
        let pairs = &self.pairs;
        let selected = &self.selected;
        let features = self.features.as_slice();

        #[cfg(feature = "parallel")]
        if self.parallel {
            use rayon::prelude::*;
            return self
                .cache
                .cells
                .par_chunks_mut(rounds)
                .zip(self.round_scores.par_iter_mut())
                .enumerate()
                .try_for_each(|(j, (cells, slot))| -> Result<(), SelectionError> {
                    *slot = if selected[j] {
                        None
                    } else {
                        Some(pairs.score_candidate(features, j, cells)?)
                    };
                    Ok(())
                });
        }

        #[cfg(not(feature = "parallel"))]
        if self.parallel {
            warn!("Parallel selection requested without the `parallel` feature, running sequentially");
        }

        for (j, (cells, slot)) in self
            .cache
            .cells
            .chunks_mut(rounds)
            .zip(self.round_scores.iter_mut())
            .enumerate()
        {
            *slot = if selected[j] {
                None
            } else {
                Some(pairs.score_candidate(features, j, cells)?)
            };
        }
        Ok(())
    }

    /// Run the next round and append its winner
    fn advance(&mut self) -> Result<(), SelectionError> {
        let round = self.features.len();
        self.score_round()?;

        let mut score = 0.0;
        let mut winner = None;
        for (j, slot) in self.round_scores.iter().enumerate() {
            if let Some((candidate_score, computed)) = *slot {
                self.stats.relevance_evaluations += computed;
                self.stats.relevance_cache_hits += round - computed;
                if candidate_score > score {
                    score = candidate_score;
                    winner = Some(j);
                }
            }
        }

        let chosen = match winner {
            Some(j) => j,
            None => {
                // No candidate scored above zero; take the lowest unselected index
                self.stats.fallback_picks += 1;
                let fallback = self.selected.iter().position(|&s| !s).ok_or(
                    SelectionError::InvalidK {
                        k: round + 1,
                        n_features: self.selected.len(),
                    },
                )?;
                trace!("DISR round {}: no positive score, falling back to {}", round, fallback);
                fallback
            }
        };

        debug!("DISR round {}: feature {} (score = {:.6})", round, chosen, score);
        self.selected[chosen] = true;
        self.features.push(chosen);
        self.scores.push(score);
        Ok(())
    }

    fn finish(self) -> Selection {
        Selection {
            features: self.features,
            scores: self.scores,
            stats: self.stats,
        }
    }
}

impl<O: InformationOracle> FeatureSelector for Disr<O> {
    fn name(&self) -> &'static str {
        "disr"
    }

    fn select(
        &self,
        k: usize,
        view: &FeatureView<'_>,
        class: &[f64],
        weights: &[f64],
    ) -> Result<Selection, SelectionError> {
        check_inputs(k, view, class, weights)?;
        let started = Instant::now();

        let labels = self.oracle.normalize_labels(class)?;
        let mut run = DisrRun::start(
            &self.oracle,
            view,
            class,
            &labels,
            weights,
            k,
            self.parallel,
        )?;
        while run.features.len() < k {
            run.advance()?;
        }

        let selection = run.finish();
        let elapsed = started.elapsed();
        record_metrics(self.name(), &selection.stats, elapsed);

        info!(
            "DISR selected {} of {} features in {:?} ({} relevance evaluations, {} cache hits)",
            k,
            view.n_features(),
            elapsed,
            selection.stats.relevance_evaluations,
            selection.stats.relevance_cache_hits
        );
        Ok(selection)
    }
}
