//! Example: Analyze a tabular data file with tabstat.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path> [preset]
//!
//! Example:
//!   cargo run --example analyze -- test_data/golden/fb_ads_small/input.csv fb-ads

use std::env;
use std::path::Path;

use tabstat::{AnalysisPlan, Analyzer, ColumnStats, GroupingOutcome, Preset};

fn main() -> tabstat::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path> [preset]");
        eprintln!("\nExample:");
        eprintln!(
            "  cargo run --example analyze -- test_data/golden/fb_ads_small/input.csv fb-ads"
        );
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    let plan = match args.get(2) {
        Some(name) => match name.parse::<Preset>() {
            Ok(preset) => preset.plan(),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => AnalysisPlan::new(),
    };

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("tabstat Analysis: {}", file_path);
    println!("{}", separator);
    println!();

    let analyzer = Analyzer::new();
    let (source, columns) = analyzer.inspect(path)?;

    println!("## Source Metadata");
    println!("  File: {}", source.file);
    println!("  Format: {}", source.format);
    println!("  Rows: {}", source.row_count);
    println!("  Columns: {}", source.column_count);
    println!("  SHA-256: {}", source.hash);
    println!();

    println!("## Columns ({})", columns.len());
    println!();
    for col in &columns {
        let detail = match &col.stats {
            ColumnStats::Numeric(stats) => format!("mean={:?} std={:?}", stats.mean, stats.std),
            ColumnStats::Categorical(cat) => {
                format!("unique={} mode={:?}", cat.unique_count, cat.mode())
            }
        };
        println!(
            "  {:24} {:12} non_null={:<6} {}",
            col.name,
            col.kind().to_string(),
            col.non_null_count,
            detail
        );
    }
    println!();

    let outcome = analyzer.analyze(path, &plan)?;

    println!("## Groupings ({})", outcome.groupings.len());
    println!();
    for grouping in &outcome.groupings {
        match grouping {
            GroupingOutcome::Completed { label, groups } => {
                println!("  {:30} {} groups", label, groups)
            }
            GroupingOutcome::Skipped { label, reason } => {
                println!("  {:30} skipped: {}", label, reason)
            }
        }
    }
    for failure in &outcome.failures {
        println!("  {:30} FAILED: {}", failure.analysis, failure.message);
    }
    println!();

    println!("## Records ({} total)", outcome.records.len());
    println!();
    for record in outcome
        .records
        .iter()
        .filter(|r| r.analysis_type.starts_with("Grouped_"))
    {
        println!(
            "  {:30} {:20} {:22} {}",
            record.analysis_type, record.column_name, record.metric, record.value
        );
    }
    println!();

    println!("{}", separator);

    Ok(())
}
