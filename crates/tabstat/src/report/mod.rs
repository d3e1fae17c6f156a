//! Normalized long-format report: records, the per-run builder, and sinks.

mod builder;
mod record;
mod sink;

pub use builder::{GroupingOutcome, ReportBuilder, TOP_GROUPS};
pub use record::{MetricValue, OutputRecord, analysis_type};
pub use sink::{CsvSink, JsonSink, OutputFormat, RecordSink, default_output_path, write_report};
