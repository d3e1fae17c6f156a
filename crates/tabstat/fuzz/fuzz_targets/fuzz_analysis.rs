//! Fuzz target for the analysis pipeline.
//!
//! Builds a table from arbitrary cells and runs a plan over it. The run must
//! never panic and must always start with the two dataset records.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tabstat::{AnalysisPlan, Analyzer, AnalyzerConfig, DataTable, SourceMetadata};

#[derive(Debug, Arbitrary)]
struct Input {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    groupings: Vec<Vec<String>>,
    designated: Vec<String>,
    max_groups: Option<u8>,
}

fuzz_target!(|input: Input| {
    if input.rows.len() > 500 || input.headers.len() > 20 {
        return;
    }

    let table = DataTable::new(input.headers, input.rows, b',');
    let mut plan = AnalysisPlan::new();
    for columns in input.groupings.into_iter().take(5) {
        plan = plan.with_grouping(columns);
    }
    for column in input.designated.into_iter().take(5) {
        plan = plan.with_designated(column);
    }

    let analyzer = Analyzer::with_config(AnalyzerConfig {
        max_groups: input.max_groups.map(usize::from),
        ..AnalyzerConfig::default()
    });
    let source = SourceMetadata::new(
        "fuzz.csv".into(),
        String::new(),
        0,
        "csv".to_string(),
        table.row_count(),
        table.column_count(),
    );
    let outcome = analyzer.analyze_table(&table, source, &plan);

    assert_eq!(outcome.records[0].metric, "total_rows");
    assert_eq!(outcome.records[1].metric, "total_columns");
});
