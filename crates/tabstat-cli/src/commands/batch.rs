//! Batch command - analyze several datasets from one manifest.
//!
//! Every dataset is an isolated run with its own analyzer and report. A
//! dataset that cannot be loaded is reported and the batch moves on.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Deserialize;
use tabstat::report::default_output_path;
use tabstat::{AnalysisPlan, Analyzer, OutputFormat, Preset, RunOutcome};
use tracing::{info, warn};

use super::{analyzer_config, file_prefix, print_outcome};

/// A batch manifest: the datasets to analyze, in order.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub datasets: Vec<DatasetEntry>,
}

/// One dataset of a batch. Relative paths resolve against the manifest's
/// directory.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetEntry {
    pub path: PathBuf,
    #[serde(default)]
    pub preset: Option<Preset>,
    #[serde(default)]
    pub plan: Option<AnalysisPlan>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub max_groups: Option<usize>,
}

fn default_delimiter() -> String {
    ",".to_string()
}

impl Manifest {
    /// Load a manifest from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read manifest '{}': {}", path.display(), e))?;
        let mut manifest: Manifest = serde_json::from_str(&text)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for entry in &mut manifest.datasets {
            if entry.path.is_relative() {
                entry.path = base.join(&entry.path);
            }
            if let Some(output) = &entry.output {
                if output.is_relative() {
                    entry.output = Some(base.join(output));
                }
            }
        }

        Ok(manifest)
    }
}

impl DatasetEntry {
    /// The plan and report prefix for this dataset.
    fn resolve_plan(&self) -> Result<(AnalysisPlan, String), Box<dyn std::error::Error>> {
        match (&self.preset, &self.plan) {
            (Some(_), Some(_)) => Err("dataset sets both 'preset' and 'plan'".into()),
            (Some(preset), None) => Ok((preset.plan(), preset.output_prefix().to_string())),
            (None, Some(plan)) => Ok((plan.clone(), file_prefix(&self.path))),
            (None, None) => Ok((AnalysisPlan::new(), file_prefix(&self.path))),
        }
    }

    /// Analyze this dataset and write its report.
    fn run(
        &self,
        format: OutputFormat,
    ) -> Result<(RunOutcome, PathBuf), Box<dyn std::error::Error>> {
        let (plan, prefix) = self.resolve_plan()?;
        let analyzer = Analyzer::with_config(analyzer_config(&self.delimiter, self.max_groups)?);
        let outcome = analyzer.analyze(&self.path, &plan)?;

        let output_path = self
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.path, &prefix, format));
        outcome.write(&output_path, format)?;

        Ok((outcome, output_path))
    }
}

pub fn run(
    manifest_path: PathBuf,
    format: OutputFormat,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let manifest = Manifest::load(&manifest_path)?;
    let total = manifest.datasets.len();

    println!(
        "{} {} datasets from {}",
        "Batch".cyan().bold(),
        total,
        manifest_path.display().to_string().white()
    );

    let mut failed = 0;
    for (i, entry) in manifest.datasets.iter().enumerate() {
        println!();
        println!(
            "[{}/{}] {}",
            i + 1,
            total,
            entry.path.display().to_string().white().bold()
        );

        match entry.run(format) {
            Ok((outcome, output_path)) => {
                info!(
                    file = %entry.path.display(),
                    records = outcome.records.len(),
                    "dataset done"
                );
                if verbose || outcome.has_failures() {
                    print_outcome(&outcome);
                }
                println!(
                    "  {} {} records to {}",
                    "Wrote".green(),
                    outcome.records.len(),
                    output_path.display()
                );
            }
            Err(e) => {
                warn!(file = %entry.path.display(), error = %e, "dataset failed");
                println!("  {} {}", "Failed:".red().bold(), e);
                failed += 1;
            }
        }
    }

    println!();
    if failed > 0 {
        return Err(format!("{} of {} datasets failed", failed, total).into());
    }

    println!("{}", "All datasets analyzed".green().bold());
    Ok(())
}
