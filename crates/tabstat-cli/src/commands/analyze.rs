//! Analyze command - run a plan over one data file and write the report.

use std::path::PathBuf;

use colored::Colorize;
use tabstat::report::default_output_path;
use tabstat::{AnalysisPlan, Analyzer, GroupingSpec, OutputFormat, Preset};

use super::{analyzer_config, file_prefix, print_outcome};

/// Arguments of `tabstat analyze`.
pub struct AnalyzeArgs {
    pub file: PathBuf,
    pub preset: Option<Preset>,
    pub plan: Option<PathBuf>,
    pub group_by: Vec<String>,
    pub numeric: Vec<String>,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub delimiter: String,
    pub max_groups: Option<usize>,
    pub verbose: bool,
}

pub fn run(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (plan, prefix) = resolve_plan(&args)?;
    let analyzer = Analyzer::with_config(analyzer_config(&args.delimiter, args.max_groups)?);

    println!(
        "{} {}",
        "Analyzing".cyan().bold(),
        args.file.display().to_string().white()
    );

    let outcome = analyzer.analyze(&args.file, &plan)?;

    println!(
        "Loaded {} rows x {} columns ({})",
        outcome.source.row_count.to_string().white().bold(),
        outcome.source.column_count.to_string().white().bold(),
        outcome.source.format
    );

    if args.verbose {
        println!();
        println!("{}", "Plan:".yellow().bold());
        for spec in &plan.group_by {
            println!("  group by {}", spec.columns.join(", "));
        }
        if !plan.designated_numeric_columns.is_empty() {
            println!("  designated {}", plan.designated_numeric_columns.join(", "));
        }
        println!();
    }

    print_outcome(&outcome);

    let output_path = args
        .output
        .unwrap_or_else(|| default_output_path(&args.file, &prefix, args.format));
    outcome.write(&output_path, args.format)?;

    println!();
    println!(
        "{} {} records to {}",
        "Wrote".green().bold(),
        outcome.records.len(),
        output_path.display().to_string().white()
    );

    if outcome.has_failures() {
        println!(
            "{}",
            format!(
                "{} grouping analyses failed; their records are incomplete",
                outcome.failures.len()
            )
            .yellow()
        );
    }

    Ok(())
}

/// Combine preset or plan file with ad-hoc flags. Returns the plan and the
/// report file prefix.
fn resolve_plan(args: &AnalyzeArgs) -> Result<(AnalysisPlan, String), Box<dyn std::error::Error>> {
    let (mut plan, prefix) = match (&args.preset, &args.plan) {
        (Some(preset), _) => (preset.plan(), preset.output_prefix().to_string()),
        (None, Some(path)) => (AnalysisPlan::load(path)?, file_prefix(&args.file)),
        (None, None) => (AnalysisPlan::new(), file_prefix(&args.file)),
    };

    for columns in &args.group_by {
        let columns: Vec<&str> = columns
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();
        plan.group_by.push(GroupingSpec::new(columns));
    }
    plan.designated_numeric_columns.extend(args.numeric.iter().cloned());

    Ok((plan, prefix))
}
