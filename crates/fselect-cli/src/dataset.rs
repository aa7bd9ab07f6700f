//! JSON dataset loading

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::borrow::Cow;
use std::path::Path;

/// Discretized dataset as stored on disk, one inner vector per feature
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dataset {
    pub features: Vec<Vec<f64>>,
    pub class: Vec<f64>,
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
    #[serde(default)]
    pub names: Option<Vec<String>>,
}

impl Dataset {
    /// Read and check a dataset file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid dataset {}", path.display()))
    }

    /// Parse and check a dataset from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(text).context("malformed JSON")?;
        dataset.check()?;
        Ok(dataset)
    }

    fn check(&self) -> Result<()> {
        let n_samples = self.class.len();
        for (j, column) in self.features.iter().enumerate() {
            if column.len() != n_samples {
                bail!(
                    "feature {} has {} samples, class has {}",
                    j,
                    column.len(),
                    n_samples
                );
            }
        }
        if let Some(names) = &self.names {
            if names.len() != self.features.len() {
                bail!(
                    "{} names given for {} features",
                    names.len(),
                    self.features.len()
                );
            }
        }
        Ok(())
    }

    pub fn n_samples(&self) -> usize {
        self.class.len()
    }

    pub fn n_features(&self) -> usize {
        self.features.len()
    }

    /// Features flattened column-major
    pub fn matrix(&self) -> Vec<f64> {
        self.features.concat()
    }

    /// Sample weights, uniform when the file carries none
    pub fn weights(&self) -> Cow<'_, [f64]> {
        match &self.weights {
            Some(weights) => Cow::Borrowed(weights),
            None => Cow::Owned(vec![1.0; self.n_samples()]),
        }
    }

    /// Display name of feature `j`
    pub fn name(&self, j: usize) -> Cow<'_, str> {
        match self.names.as_ref().and_then(|names| names.get(j)) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("f{}", j)),
        }
    }
}
