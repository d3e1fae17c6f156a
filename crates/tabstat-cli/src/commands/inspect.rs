//! Inspect command - show how each column would be summarized.

use std::path::PathBuf;

use colored::Colorize;
use tabstat::{Analyzer, ColumnStats, ColumnSummary};

use super::analyzer_config;

pub fn run(
    file: PathBuf,
    delimiter: &str,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = Analyzer::with_config(analyzer_config(delimiter, None)?);
    let (source, columns) = analyzer.inspect(&file)?;

    if json_output {
        let report = serde_json::json!({
            "source": source,
            "columns": columns,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", "Columns of".cyan().bold(), source.file.white());
    println!(
        "{} rows, {} columns, {}",
        source.row_count, source.column_count, source.format
    );
    println!();

    for column in &columns {
        let kind = column.kind();
        let kind = if kind.is_numeric() {
            kind.to_string().green()
        } else {
            kind.to_string().normal()
        };
        println!(
            "  {:24} {:12} {:>8}/{:<8} {}",
            column.name,
            kind,
            column.non_null_count,
            column.total_count,
            headline(column)
        );
    }

    Ok(())
}

/// One-line description of a column's main statistic.
fn headline(column: &ColumnSummary) -> String {
    match &column.stats {
        ColumnStats::Numeric(stats) => match (stats.mean, stats.min, stats.max) {
            (Some(mean), Some(min), Some(max)) => {
                format!("mean={:.3} min={} max={}", mean, min, max)
            }
            _ => "no numeric values".dimmed().to_string(),
        },
        ColumnStats::Categorical(cat) => match cat.most_frequent.first() {
            Some((value, count)) => format!("unique={} top={}:{}", cat.unique_count, value, count),
            None => "no values".dimmed().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_numeric() {
        let column = ColumnSummary::from_values("spend", &["1", "2", "3"]);
        assert_eq!(headline(&column), "mean=2.000 min=1 max=3");
    }

    #[test]
    fn test_headline_categorical() {
        let column = ColumnSummary::from_values("page", &["a", "b", "b"]);
        assert_eq!(headline(&column), "unique=2 top=b:2");
    }

    #[test]
    fn test_run_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.csv");
        std::fs::write(&input, "a,b\n1,x\n2,y\n").unwrap();
        run(input, ",", true).unwrap();
    }
}
