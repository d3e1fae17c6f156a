//! tabstat: descriptive statistics and grouped rollups for tabular datasets.
//!
//! tabstat reads a delimited file with a header row, classifies every column
//! as numeric or categorical, and produces a normalized long-format report
//! of per-column statistics and multi-key group aggregations.
//!
//! # Core Principles
//!
//! - **Dataset-agnostic**: grouping and designated columns come from a plan
//! - **Deterministic**: identical input always yields identical records
//! - **Isolated failures**: a failing grouping never aborts the run
//!
//! # Example
//!
//! ```no_run
//! use tabstat::{AnalysisPlan, Analyzer, OutputFormat};
//!
//! let plan = AnalysisPlan::new()
//!     .with_grouping(["page_id"])
//!     .with_designated("estimated_spend");
//!
//! let outcome = Analyzer::new().analyze("ads.csv", &plan).unwrap();
//! outcome.write("ads_analysis_results.csv", OutputFormat::Csv).unwrap();
//!
//! println!("Records: {}", outcome.records.len());
//! ```

pub mod error;
pub mod grouping;
pub mod input;
pub mod plan;
pub mod report;
pub mod stats;

mod analyzer;

pub use crate::analyzer::{Analyzer, AnalyzerConfig, RunOutcome, StepFailure};
pub use error::{Result, TabstatError};
pub use grouping::{GroupKey, GroupedRows};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use plan::{AnalysisPlan, GroupingSpec, Preset};
pub use report::{
    GroupingOutcome, MetricValue, OutputFormat, OutputRecord, RecordSink, ReportBuilder,
};
pub use stats::{CategoricalSummary, ColumnKind, ColumnStats, ColumnSummary, NumericStats};
