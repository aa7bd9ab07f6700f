//! Command-line arguments

use crate::output::OutputFormat;
use clap::Parser;
use feature_select::Algorithm;
use std::path::PathBuf;

/// fselect - greedy information-theoretic feature selection
#[derive(Debug, Parser)]
#[command(name = "fselect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dataset to select from (JSON)
    pub dataset: PathBuf,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Selection criterion: cmim or disr
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Number of features to select
    #[arg(short)]
    pub k: Option<usize>,

    /// Ignore the dataset weights
    #[arg(long)]
    pub unweighted: bool,

    /// Spread per-feature work over threads
    #[arg(long)]
    pub parallel: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_full() {
        let cli = Cli::try_parse_from([
            "fselect", "-a", "DISR", "-k", "3", "--unweighted", "--format", "json", "-vv",
            "data.json",
        ])
        .unwrap();
        assert_eq!(cli.algorithm, Some(Algorithm::Disr));
        assert_eq!(cli.k, Some(3));
        assert!(cli.unweighted);
        assert!(!cli.parallel);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.dataset, PathBuf::from("data.json"));
    }

    #[test]
    fn test_parse_rejects_unknown_algorithm() {
        assert!(Cli::try_parse_from(["fselect", "-a", "mrmr", "data.json"]).is_err());
    }
}
