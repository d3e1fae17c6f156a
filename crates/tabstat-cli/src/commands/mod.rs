//! CLI command implementations.

pub mod analyze;
pub mod batch;
pub mod inspect;

use std::path::Path;

use colored::Colorize;
use tabstat::{AnalyzerConfig, GroupingOutcome, ParserConfig, RunOutcome};

/// Build the analyzer configuration shared by all commands.
pub fn analyzer_config(
    delimiter: &str,
    max_groups: Option<usize>,
) -> Result<AnalyzerConfig, Box<dyn std::error::Error>> {
    Ok(AnalyzerConfig {
        parser: ParserConfig {
            delimiter: ParserConfig::delimiter_from_name(delimiter)?,
            ..ParserConfig::default()
        },
        max_groups,
    })
}

/// Report prefix for a data file without a preset: its file stem.
pub fn file_prefix(file: &Path) -> String {
    file.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string())
}

/// Print the per-grouping status lines and failures of a run.
pub fn print_outcome(outcome: &RunOutcome) {
    for grouping in &outcome.groupings {
        match grouping {
            GroupingOutcome::Completed { label, groups } => println!(
                "  {} {} ({} groups)",
                "✓".green(),
                label.white(),
                groups
            ),
            GroupingOutcome::Skipped { label, reason } => {
                println!("  {} {} ({})", "-".yellow(), label.white(), reason.dimmed())
            }
        }
    }

    for failure in &outcome.failures {
        println!(
            "  {} {}: {}",
            "✗".red(),
            failure.analysis.white(),
            failure.message.red()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_config_delimiter() {
        let config = analyzer_config("tab", Some(10)).unwrap();
        assert_eq!(config.parser.delimiter, Some(b'\t'));
        assert_eq!(config.max_groups, Some(10));

        let config = analyzer_config("auto", None).unwrap();
        assert_eq!(config.parser.delimiter, None);

        assert!(analyzer_config("x", None).is_err());
    }

    #[test]
    fn test_file_prefix() {
        assert_eq!(file_prefix(Path::new("data/ads_2024.csv")), "ads_2024");
    }
}
