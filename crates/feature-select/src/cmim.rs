//! Conditional Mutual Information Maximisation
//!
//! Fleuret's fast exact CMIM ("Fast Binary Feature Selection with Conditional
//! Mutual Information", JMLR 2004) over weighted mutual information.
//!
//! Round `i` picks the feature maximising `min_{x < i} I(X_j; Y | X_{s_x})`.
//! Rather than evaluating that minimum from scratch, every feature keeps an
//! upper bound on its score together with the number of selected features
//! already folded into the bound. The bound only ever shrinks, so a feature
//! stops being refined as soon as it falls to the best score seen this
//! round: it cannot win, and the work done so far carries over to later
//! rounds.
//!
//! Selected features are never masked out. Conditioning a feature on itself
//! yields zero, which removes it from contention once its bound catches up
//! with its own selection.

use crate::arena;
use crate::error::SelectionError;
use crate::selector::{
    fill_class_relevance, first_argmax, record_metrics, FeatureSelector, Selection, SelectionStats,
};
use crate::validate::check_inputs;
use crate::view::FeatureView;
use info_oracle::{InformationOracle, WeightedOracle};
use std::time::Instant;
use tracing::{debug, info, trace};

/// CMIM feature selector
#[derive(Debug, Clone, Default)]
pub struct Cmim<O = WeightedOracle> {
    oracle: O,
    parallel: bool,
}

impl Cmim {
    /// Create a CMIM selector over weighted mutual information
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: InformationOracle> Cmim<O> {
    /// Create a CMIM selector backed by `oracle`
    pub fn with_oracle(oracle: O) -> Self {
        Self {
            oracle,
            parallel: false,
        }
    }

    /// Compute the initial feature/class relevance in parallel
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The oracle statistics are requested from
    pub fn oracle(&self) -> &O {
        &self.oracle
    }
}

/// How far a feature's score bound has been refined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Refinement {
    /// Still the plain feature/class mutual information
    Unrefined,
    /// Conditioned on this many of the selected features
    Partial(usize),
    /// Conditioned on every feature selected so far
    Exhausted,
}

/// Score cache and output of one CMIM call
struct CmimRun<'a, O> {
    oracle: &'a O,
    view: &'a FeatureView<'a>,
    class: &'a [f64],
    weights: &'a [f64],
    /// Upper bound on each feature's score, never increases
    class_mi: Vec<f64>,
    /// Number of selected features folded into `class_mi[j]`
    last_used: Vec<usize>,
    features: Vec<usize>,
    scores: Vec<f64>,
    stats: SelectionStats,
}

impl<'a, O: InformationOracle> CmimRun<'a, O> {
    /// Round 0: score every feature by its relevance to the class
    fn start(
        oracle: &'a O,
        view: &'a FeatureView<'a>,
        class: &'a [f64],
        weights: &'a [f64],
        k: usize,
        parallel: bool,
    ) -> Result<Self, SelectionError> {
        let n_features = view.n_features();
        let mut class_mi = arena::filled("CMIM score cache", n_features, 0.0)?;
        let last_used = arena::filled("CMIM refinement counters", n_features, 0)?;
        let mut features = arena::with_capacity("CMIM output", k)?;
        let mut scores = arena::with_capacity("CMIM output scores", k)?;

        fill_class_relevance(oracle, view, class, weights, parallel, &mut class_mi)?;
        let stats = SelectionStats {
            mi_evaluations: n_features,
            ..SelectionStats::default()
        };

        let first = first_argmax(&class_mi).ok_or(SelectionError::InvalidK { k, n_features })?;
        debug!("CMIM round 0: feature {} (I = {:.6})", first, class_mi[first]);
        features.push(first);
        scores.push(class_mi[first]);

        Ok(Self {
            oracle,
            view,
            class,
            weights,
            class_mi,
            last_used,
            features,
            scores,
            stats,
        })
    }

    /// Run the next round and append its winner
    fn advance(&mut self) -> Result<(), SelectionError> {
        let round = self.features.len();
        let mut score = 0.0;
        let mut winner = None;

        for j in 0..self.view.n_features() {
            while self.class_mi[j] > score && self.last_used[j] < round {
                let condition = self.features[self.last_used[j]];
                let conditional_info = self.oracle.conditional_mutual_information(
                    self.view.column(j),
                    self.class,
                    self.view.column(condition),
                    self.weights,
                )?;
                self.stats.cmi_evaluations += 1;
                if self.class_mi[j] > conditional_info {
                    self.class_mi[j] = conditional_info;
                }
                self.last_used[j] += 1;
            }

            if self.class_mi[j] > score {
                score = self.class_mi[j];
                winner = Some(j);
            }
        }

        let chosen = match winner {
            Some(j) => j,
            None => {
                // Nothing scored above zero; take the lowest index not yet chosen
                self.stats.fallback_picks += 1;
                let fallback = (0..self.view.n_features())
                    .find(|j| !self.features.contains(j))
                    .ok_or(SelectionError::InvalidK {
                        k: round + 1,
                        n_features: self.view.n_features(),
                    })?;
                trace!("CMIM round {}: no positive score, falling back to {}", round, fallback);
                fallback
            }
        };

        debug!("CMIM round {}: feature {} (score = {:.6})", round, chosen, score);
        self.features.push(chosen);
        self.scores.push(score);
        Ok(())
    }

    /// Refinement state of feature `j`'s score bound
    fn refinement(&self, j: usize) -> Refinement {
        match self.last_used[j] {
            0 => Refinement::Unrefined,
            n if n >= self.features.len() => Refinement::Exhausted,
            n => Refinement::Partial(n),
        }
    }

    fn finish(self) -> Selection {
        Selection {
            features: self.features,
            scores: self.scores,
            stats: self.stats,
        }
    }
}

impl<O: InformationOracle> FeatureSelector for Cmim<O> {
    fn name(&self) -> &'static str {
        "cmim"
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

        let mut run = CmimRun::start(&self.oracle, view, class, weights, k, self.parallel)?;
        while run.features.len() < k {
            run.advance()?;
        }

        let unrefined = (0..view.n_features())
            .filter(|&j| run.refinement(j) == Refinement::Unrefined)
            .count();
        let selection = run.finish();
        let elapsed = started.elapsed();
        record_metrics(self.name(), &selection.stats, elapsed);

        info!(
            "CMIM selected {} of {} features in {:?} ({} CMI evaluations, {} features never refined)",
            k,
            view.n_features(),
            elapsed,
            selection.stats.cmi_evaluations,
            unrefined
        );
        Ok(selection)
    }
}
