//! Selector Configuration and Factory

use crate::cmim::Cmim;
use crate::disr::Disr;
use crate::error::SelectionError;
use crate::selector::{FeatureSelector, Selection};
use crate::view::FeatureView;
use info_oracle::UnweightedOracle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selection criterion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Conditional Mutual Information Maximisation
    #[default]
    Cmim,
    /// Double Input Symmetrical Relevance
    Disr,
}

impl Algorithm {
    /// Every supported algorithm
    pub fn available() -> &'static [Algorithm] {
        &[Algorithm::Cmim, Algorithm::Disr]
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Cmim => "cmim",
            Algorithm::Disr => "disr",
        }
    }

    /// One-line description of the criterion
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Cmim => {
                "CMIM - maximise the minimum conditional MI with the class given any selected feature"
            }
            Algorithm::Disr => {
                "DISR - maximise the summed symmetrical relevance of pairs with selected features"
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cmim" => Ok(Algorithm::Cmim),
            "disr" => Ok(Algorithm::Disr),
            _ => Err(SelectionError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Selector configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Criterion to select with
    pub algorithm: Algorithm,
    /// Number of features to select
    pub k: usize,
    /// Use the sample weights; when false every sample counts equally
    pub weighted: bool,
    /// Spread per-feature work over threads (needs the `parallel` feature)
    pub parallel: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Cmim,
            k: 10,
            weighted: true,
            parallel: false,
        }
    }
}

impl SelectorConfig {
    /// Build the configured selector
    pub fn build(&self) -> Box<dyn FeatureSelector> {
        match (self.algorithm, self.weighted) {
            (Algorithm::Cmim, true) => Box::new(Cmim::new().parallel(self.parallel)),
            (Algorithm::Cmim, false) => {
                Box::new(Cmim::with_oracle(UnweightedOracle).parallel(self.parallel))
            }
            (Algorithm::Disr, true) => Box::new(Disr::new().parallel(self.parallel)),
            (Algorithm::Disr, false) => {
                Box::new(Disr::with_oracle(UnweightedOracle).parallel(self.parallel))
            }
        }
    }

    /// Build the configured selector and select `k` features
    pub fn select(
        &self,
        view: &FeatureView<'_>,
        class: &[f64],
        weights: &[f64],
    ) -> Result<Selection, SelectionError> {
        self.build().select(self.k, view, class, weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parse() {
        assert_eq!("CMIM".parse::<Algorithm>().unwrap(), Algorithm::Cmim);
        assert_eq!("disr".parse::<Algorithm>().unwrap(), Algorithm::Disr);
        assert_eq!(
            "mrmr".parse::<Algorithm>(),
            Err(SelectionError::UnknownAlgorithm("mrmr".to_string()))
        );
    }

    #[test]
    fn test_available_round_trips_names() {
        for algorithm in Algorithm::available() {
            assert_eq!(algorithm.as_str().parse::<Algorithm>().unwrap(), *algorithm);
            assert!(!algorithm.description().is_empty());
        }
    }

    #[test]
    fn test_build_names() {
        let mut config = SelectorConfig::default();
        assert_eq!(config.build().name(), "cmim");
        config.algorithm = Algorithm::Disr;
        config.weighted = false;
        assert_eq!(config.build().name(), "disr");
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SelectorConfig =
            serde_json::from_str(r#"{ "algorithm": "disr", "k": 3 }"#).unwrap();
        assert_eq!(config.algorithm, Algorithm::Disr);
        assert_eq!(config.k, 3);
        assert!(config.weighted);
        assert!(!config.parallel);
    }

    #[test]
    fn test_config_select() {
        let data = [0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0];
        let view = FeatureView::from_column_major(&data, 4, 2).unwrap();
        let config = SelectorConfig {
            k: 1,
            ..SelectorConfig::default()
        };
        let selection = config.select(&view, &[0.0, 1.0, 0.0, 1.0], &[1.0; 4]).unwrap();
        assert_eq!(selection.features, vec![0]);
    }
}
