//! Selection report rendering

use crate::dataset::Dataset;
use anyhow::Result;
use clap::ValueEnum;
use feature_select::{Algorithm, Selection, SelectionStats};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// How the selection is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Pretty-printed JSON document
    Json,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    algorithm: Algorithm,
    features: Vec<RankedFeature<'a>>,
    stats: SelectionStats,
}

#[derive(Debug, Serialize)]
struct RankedFeature<'a> {
    rank: usize,
    index: usize,
    name: std::borrow::Cow<'a, str>,
    score: f64,
}

fn ranked<'a>(selection: &Selection, dataset: &'a Dataset) -> Vec<RankedFeature<'a>> {
    selection
        .features
        .iter()
        .zip(&selection.scores)
        .enumerate()
        .map(|(rank, (&index, &score))| RankedFeature {
            rank: rank + 1,
            index,
            name: dataset.name(index),
            score,
        })
        .collect()
}

/// Render a selection in the requested format
pub fn render(
    format: OutputFormat,
    algorithm: Algorithm,
    selection: &Selection,
    dataset: &Dataset,
) -> Result<String> {
    let features = ranked(selection, dataset);
    match format {
        OutputFormat::Json => {
            let report = Report {
                algorithm,
                features,
                stats: selection.stats,
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Table => {
            let width = features
                .iter()
                .map(|f| f.name.chars().count())
                .max()
                .unwrap_or(0)
                .max("name".len());
            let mut out = String::new();
            writeln!(out, "{:>4}  {:>5}  {:<width$}  {:>10}", "rank", "index", "name", "score")?;
            for f in &features {
                writeln!(
                    out,
                    "{:>4}  {:>5}  {:<width$}  {:>10.6}",
                    f.rank, f.index, f.name, f.score
                )?;
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Dataset, Selection) {
        let dataset = Dataset::from_json(
            r#"{ "features": [[0, 1], [1, 1], [0, 0]], "class": [0, 1], "names": ["a", "speed", "c"] }"#,
        )
        .unwrap();
        let selection = Selection {
            features: vec![1, 0],
            scores: vec![0.5, 0.25],
            stats: SelectionStats {
                mi_evaluations: 3,
                cmi_evaluations: 2,
                ..SelectionStats::default()
            },
        };
        (dataset, selection)
    }

    #[test]
    fn test_table() {
        let (dataset, selection) = fixture();
        let table = render(OutputFormat::Table, Algorithm::Cmim, &selection, &dataset).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("rank"));
        assert!(lines[1].contains("speed"));
        assert!(lines[1].contains("0.500000"));
        assert!(lines[2].trim_start().starts_with('2'));
    }

    #[test]
    fn test_table_aligns_non_ascii_names() {
        let dataset = Dataset::from_json(
            r#"{ "features": [[0, 1], [1, 1]], "class": [0, 1], "names": ["température", "rpm"] }"#,
        )
        .unwrap();
        let selection = Selection {
            features: vec![0, 1],
            scores: vec![1.0, 0.0],
            stats: SelectionStats::default(),
        };
        let table = render(OutputFormat::Table, Algorithm::Cmim, &selection, &dataset).unwrap();
        let widths: Vec<usize> = table.lines().map(|line| line.chars().count()).collect();
        assert_eq!(widths.len(), 3);
        assert!(widths.iter().all(|&w| w == widths[0]), "{table}");
    }

    #[test]
    fn test_json() {
        let (dataset, selection) = fixture();
        let json = render(OutputFormat::Json, Algorithm::Disr, &selection, &dataset).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["algorithm"], "disr");
        assert_eq!(value["features"][0]["index"], 1);
        assert_eq!(value["features"][0]["name"], "speed");
        assert_eq!(value["features"][1]["rank"], 2);
        assert_eq!(value["stats"]["cmi_evaluations"], 2);
    }
}
