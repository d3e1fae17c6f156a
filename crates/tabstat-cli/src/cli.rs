//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tabstat::{OutputFormat, Preset};

/// tabstat: descriptive statistics and grouped rollups for tabular datasets
#[derive(Parser)]
#[command(name = "tabstat")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a data file and write the long-format report
    Analyze {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Built-in plan for a known dataset (fb-ads, fb-posts, tw-posts)
        #[arg(long, conflicts_with = "plan")]
        preset: Option<Preset>,

        /// Path to a JSON analysis plan
        #[arg(long, value_name = "PLAN")]
        plan: Option<PathBuf>,

        /// Group-by columns, comma separated (repeatable)
        #[arg(short, long = "group-by", value_name = "COLUMNS")]
        group_by: Vec<String>,

        /// Designated numeric column for per-group means (repeatable)
        #[arg(short, long, value_name = "COLUMN")]
        numeric: Vec<String>,

        /// Output path (default: <prefix>_analysis_results.<ext> next to FILE)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,

        /// Field delimiter (comma, tab, semicolon, pipe, or auto)
        #[arg(short, long, default_value = ",")]
        delimiter: String,

        /// Fail any grouping that yields more than this many groups
        #[arg(long, value_name = "N")]
        max_groups: Option<usize>,
    },

    /// Show each column's inferred kind and headline statistics
    Inspect {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Field delimiter (comma, tab, semicolon, pipe, or auto)
        #[arg(short, long, default_value = ",")]
        delimiter: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze every dataset listed in a JSON manifest
    Batch {
        /// Path to the batch manifest
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// Output format for datasets without an explicit output path
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "tabstat",
            "analyze",
            "ads.csv",
            "--preset",
            "fb-ads",
            "--group-by",
            "page_id,ad_id",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze {
                preset, group_by, ..
            } => {
                assert_eq!(preset, Some(Preset::FacebookAds));
                assert_eq!(group_by, vec!["page_id,ad_id".to_string()]);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_preset_conflicts_with_plan() {
        let result = Cli::try_parse_from([
            "tabstat", "analyze", "a.csv", "--preset", "fb-ads", "--plan", "p.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_preset_rejected() {
        let result = Cli::try_parse_from(["tabstat", "analyze", "a.csv", "--preset", "reddit"]);
        assert!(result.is_err());
    }
}
