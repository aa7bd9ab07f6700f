//! Layered configuration: defaults, optional file, `FSELECT_*` environment, flags

use crate::cli::Cli;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use feature_select::SelectorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::Level;

/// Everything the binary can be configured with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub selector: SelectorConfig,
    pub format: OutputFormat,
    /// Base log level, raised by each `-v`
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            selector: SelectorConfig::default(),
            format: OutputFormat::Table,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from an optional file and the environment.
    ///
    /// Nested keys use a double underscore, e.g. `FSELECT_SELECTOR__K=5`.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path));
        }
        builder
            .add_source(
                Environment::with_prefix("FSELECT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to load configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Apply command-line overrides
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(algorithm) = cli.algorithm {
            self.selector.algorithm = algorithm;
        }
        if let Some(k) = cli.k {
            self.selector.k = k;
        }
        if cli.unweighted {
            self.selector.weighted = false;
        }
        if cli.parallel {
            self.selector.parallel = true;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        self
    }

    /// Effective log level after `verbose` extra steps
    pub fn level(&self, verbose: u8) -> Result<Level> {
        let base: Level = self
            .log_level
            .parse()
            .with_context(|| format!("unknown log level {:?}", self.log_level))?;
        const LADDER: [Level; 5] = [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE];
        let start = LADDER.iter().position(|&l| l == base).unwrap_or(1);
        Ok(LADDER[(start + verbose as usize).min(LADDER.len() - 1)])
    }
}
