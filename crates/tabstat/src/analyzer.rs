//! Main Analyzer struct: one isolated run per dataset.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::plan::AnalysisPlan;
use crate::report::{GroupingOutcome, OutputFormat, OutputRecord, ReportBuilder, write_report};
use crate::stats::ColumnSummary;

/// Configuration for an analysis run.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Fail any grouping that yields more groups than this (None = no limit).
    pub max_groups: Option<usize>,
}

/// A grouping analysis that failed; the rest of the run went ahead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepFailure {
    /// Label of the failed grouping.
    pub analysis: String,
    /// Error message.
    pub message: String,
}

/// Result of analyzing one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Report records in the order they were produced.
    pub records: Vec<OutputRecord>,
    /// Outcome of each grouping request that did not fail.
    pub groupings: Vec<GroupingOutcome>,
    /// Grouping requests that failed.
    pub failures: Vec<StepFailure>,
}

impl RunOutcome {
    /// Returns true if any grouping step failed.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Groupings that were skipped because their columns were absent.
    pub fn skipped(&self) -> impl Iterator<Item = &GroupingOutcome> {
        self.groupings
            .iter()
            .filter(|g| matches!(g, GroupingOutcome::Skipped { .. }))
    }

    /// Write the records to a report file.
    pub fn write(&self, path: impl AsRef<Path>, format: OutputFormat) -> Result<()> {
        write_report(path, format, &self.records)
    }
}

/// The dataset analysis engine.
pub struct Analyzer {
    config: AnalyzerConfig,
    parser: Parser,
}

impl Analyzer {
    /// Create a new analyzer with default configuration.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create an analyzer with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self { config, parser }
    }

    /// Load a data file and run the plan over it.
    ///
    /// Only failure to load the source is an error. Grouping failures are
    /// collected in [`RunOutcome::failures`].
    pub fn analyze(&self, path: impl AsRef<Path>, plan: &AnalysisPlan) -> Result<RunOutcome> {
        let (table, source) = self.parser.parse_file(path)?;
        Ok(self.analyze_table(&table, source, plan))
    }

    /// Run the plan over an already-loaded table.
    pub fn analyze_table(
        &self,
        table: &DataTable,
        source: SourceMetadata,
        plan: &AnalysisPlan,
    ) -> RunOutcome {
        info!(
            file = %source.file,
            rows = table.row_count(),
            columns = table.column_count(),
            groupings = plan.group_by.len(),
            "starting analysis run"
        );

        let mut builder = ReportBuilder::new().with_max_groups(self.config.max_groups);
        builder.dataset_info(table);
        builder.overall_columns(table);

        let mut groupings = Vec::new();
        let mut failures = Vec::new();

        for spec in &plan.group_by {
            match builder.analyze_grouping(table, spec, &plan.designated_numeric_columns) {
                Ok(outcome) => groupings.push(outcome),
                Err(e) => {
                    warn!(grouping = %spec.label(), error = %e, "grouped analysis failed");
                    failures.push(StepFailure {
                        analysis: spec.label(),
                        message: e.to_string(),
                    });
                }
            }
        }

        let records = builder.into_records();
        info!(
            file = %source.file,
            records = records.len(),
            failures = failures.len(),
            "finished analysis run"
        );

        RunOutcome {
            source,
            records,
            groupings,
            failures,
        }
    }

    /// Load a data file and summarize each column without grouping.
    pub fn inspect(&self, path: impl AsRef<Path>) -> Result<(SourceMetadata, Vec<ColumnSummary>)> {
        let (table, source) = self.parser.parse_file(path)?;
        let columns = (0..table.column_count())
            .map(|index| ColumnSummary::from_table(&table, index))
            .collect();
        Ok((source, columns))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::report::MetricValue;
    use crate::stats::ColumnKind;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_analyze_simple_csv() {
        let file = create_test_file("page_id,ad_id,spend\np1,a1,10\np1,a2,20\np2,a3,\n");
        let plan = AnalysisPlan::new()
            .with_grouping(["page_id"])
            .with_designated("spend");

        let outcome = Analyzer::new().analyze(file.path(), &plan).unwrap();

        assert_eq!(outcome.source.row_count, 3);
        assert_eq!(outcome.source.column_count, 3);
        assert!(!outcome.has_failures());
        assert_eq!(outcome.groupings.len(), 1);
        assert_eq!(outcome.records[0].metric, "total_rows");
    }

    #[test]
    fn test_failure_isolated_to_step() {
        let file = create_test_file("page_id,ad_id\np1,a1\np2,a2\np3,a3\n");
        let plan = AnalysisPlan::new()
            .with_grouping(["page_id", "ad_id"])
            .with_grouping(["missing"]);
        let analyzer = Analyzer::with_config(AnalyzerConfig {
            max_groups: Some(2),
            ..AnalyzerConfig::default()
        });

        let outcome = analyzer.analyze(file.path(), &plan).unwrap();

        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].analysis, "page_id_ad_id");
        assert_eq!(outcome.skipped().count(), 1);
        // Overall analysis still ran.
        assert!(
            outcome
                .records
                .iter()
                .any(|r| r.analysis_type == "Overall" && r.column_name == "ad_id")
        );
    }

    #[test]
    fn test_empty_grouping_is_skipped() {
        let file = create_test_file("page_id,spend\np1,10\np1,20\np2,5\n");
        let plan = AnalysisPlan::from_json(r#"{"group_by": [[], ["page_id"]]}"#).unwrap();

        let outcome = Analyzer::new().analyze(file.path(), &plan).unwrap();

        assert!(!outcome.has_failures());
        assert_eq!(outcome.skipped().count(), 1);
        assert_eq!(
            outcome.groupings[1],
            GroupingOutcome::Completed {
                label: "page_id".to_string(),
                groups: 2
            }
        );
        assert!(
            outcome
                .records
                .iter()
                .any(|r| r.analysis_type == "Grouped_page_id" && r.metric == "num_groups")
        );
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = Analyzer::new()
            .analyze("/no/such/file.csv", &AnalysisPlan::new())
            .unwrap_err();
        assert!(err.is_source_unavailable());
    }

    #[test]
    fn test_header_only_file() {
        let file = create_test_file("page_id,spend\n");
        let plan = AnalysisPlan::new().with_grouping(["page_id"]);
        let outcome = Analyzer::new().analyze(file.path(), &plan).unwrap();

        assert_eq!(outcome.records[0].value, MetricValue::Count(0));
        assert_eq!(
            outcome.groupings,
            vec![GroupingOutcome::Completed {
                label: "page_id".to_string(),
                groups: 0
            }]
        );
    }

    #[test]
    fn test_inspect() {
        let file = create_test_file("id,score\na,1.5\nb,2.5\n");
        let (source, columns) = Analyzer::new().inspect(file.path()).unwrap();
        assert_eq!(source.column_count, 2);
        assert_eq!(columns[0].kind(), ColumnKind::Categorical);
        assert_eq!(columns[1].kind(), ColumnKind::Numeric);
    }
}
