//! fselect Command-Line Front End
//!
//! Loads a discretized JSON dataset, runs the configured selector and renders
//! the ranked features.

pub mod cli;
pub mod dataset;
pub mod output;
pub mod settings;

use anyhow::{Context, Result};
use dataset::Dataset;
use feature_select::FeatureView;
use settings::Settings;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

pub use cli::Cli;

/// Initialize logging to stderr
pub fn init_logging(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")
}

/// Run a selection on a loaded dataset and render the report
pub fn select_and_render(settings: &Settings, dataset: &Dataset) -> Result<String> {
    let matrix = dataset.matrix();
    let view = FeatureView::from_column_major(&matrix, dataset.n_samples(), dataset.n_features())?;
    let weights = dataset.weights();

    debug!(
        algorithm = %settings.selector.algorithm,
        k = settings.selector.k,
        weighted = settings.selector.weighted,
        "Selecting features"
    );
    let selection = settings.selector.select(&view, &dataset.class, &weights)?;
    info!(
        selected = selection.features.len(),
        oracle_evaluations = selection.stats.oracle_evaluations(),
        "Selection complete"
    );

    output::render(settings.format, settings.selector.algorithm, &selection, dataset)
}

/// Full command: configuration, logging, dataset, selection, report
pub fn run(cli: &Cli) -> Result<String> {
    let settings = Settings::load(cli.config.as_deref())?.merge_cli(cli);
    init_logging(settings.level(cli.verbose)?)?;

    info!("=== fselect v{} ===", env!("CARGO_PKG_VERSION"));
    let dataset = Dataset::load(&cli.dataset)?;
    info!(
        samples = dataset.n_samples(),
        features = dataset.n_features(),
        path = %cli.dataset.display(),
        "Dataset loaded"
    );

    select_and_render(&settings, &dataset)
}
