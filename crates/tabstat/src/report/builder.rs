//! Accumulates report records for one dataset run.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::record::{MetricValue, OutputRecord, analysis_type};
use crate::error::{Result, TabstatError};
use crate::grouping::GroupedRows;
use crate::input::{DataTable, field};
use crate::plan::GroupingSpec;
use crate::stats::{ColumnStats, ColumnSummary, NumericStats, parse_numeric};

/// Number of largest groups listed per grouping.
pub const TOP_GROUPS: usize = 5;

/// What happened to one grouping request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GroupingOutcome {
    /// Records were produced for `groups` groups.
    Completed { label: String, groups: usize },
    /// Nothing was produced, e.g. no grouping column exists.
    Skipped { label: String, reason: String },
}

impl GroupingOutcome {
    /// The grouping label.
    pub fn label(&self) -> &str {
        match self {
            GroupingOutcome::Completed { label, .. } | GroupingOutcome::Skipped { label, .. } => {
                label
            }
        }
    }
}

/// Append-only buffer of report records.
///
/// Each dataset run owns one builder; records are never modified or
/// removed once pushed.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    records: Vec<OutputRecord>,
    max_groups: Option<usize>,
}

impl ReportBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail grouping requests that produce more than `max` groups.
    pub fn with_max_groups(mut self, max: Option<usize>) -> Self {
        self.max_groups = max;
        self
    }

    /// Records accumulated so far, in insertion order.
    pub fn records(&self) -> &[OutputRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the builder, returning its records.
    pub fn into_records(self) -> Vec<OutputRecord> {
        self.records
    }

    fn push(
        &mut self,
        analysis_type: &str,
        column_name: &str,
        metric: &str,
        value: impl Into<MetricValue>,
    ) {
        self.records
            .push(OutputRecord::new(analysis_type, column_name, metric, value));
    }

    /// Record row and column counts.
    pub fn dataset_info(&mut self, table: &DataTable) {
        use analysis_type::{BASIC, DATASET_INFO};

        self.push(DATASET_INFO, BASIC, "total_rows", table.row_count());
        self.push(DATASET_INFO, BASIC, "total_columns", table.column_count());
    }

    /// Record a column summary under the given analysis type and group info.
    pub fn analyze_column(&mut self, summary: &ColumnSummary, analysis: &str, group_info: &str) {
        let mut push = |metric: &str, value: MetricValue| {
            self.records.push(
                OutputRecord::new(analysis, summary.name.as_str(), metric, value)
                    .with_group_info(group_info),
            );
        };

        push("total_count", summary.total_count.into());
        push("non_null_count", summary.non_null_count.into());

        match &summary.stats {
            ColumnStats::Numeric(stats) => {
                push("mean", stats.mean.into());
                push("min", stats.min.into());
                push("max", stats.max.into());
                push("std", stats.std.into());
            }
            ColumnStats::Categorical(cat) => {
                push("unique_count", cat.unique_count.into());
                for (i, (value, count)) in cat.most_frequent.iter().enumerate() {
                    push(
                        &format!("most_frequent_{}", i + 1),
                        format!("{}:{}", value, count).into(),
                    );
                }
            }
        }
    }

    /// Summarize every header column over the whole table.
    pub fn overall_columns(&mut self, table: &DataTable) {
        for index in 0..table.column_count() {
            let summary = ColumnSummary::from_table(table, index);
            debug!(column = %summary.name, kind = %summary.kind(), "analyzed column");
            self.analyze_column(&summary, analysis_type::OVERALL, "");
        }
    }

    /// Run one grouping request: group summary, largest groups, and the
    /// distribution of per-group means for each designated column.
    ///
    /// A request whose columns are all missing is skipped, not failed.
    /// Records pushed before an error stay in the buffer.
    pub fn analyze_grouping(
        &mut self,
        table: &DataTable,
        spec: &GroupingSpec,
        designated: &[String],
    ) -> Result<GroupingOutcome> {
        let label = spec.label();
        let analysis = analysis_type::grouped(&label);

        let grouped = match GroupedRows::build(table, &spec.columns) {
            Ok(grouped) => grouped,
            Err(TabstatError::ColumnNotFound { columns }) => {
                warn!(grouping = %label, ?columns, "grouping columns not found in dataset");
                return Ok(GroupingOutcome::Skipped {
                    label,
                    reason: "grouping columns not found in dataset".to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        if let Some(max) = self.max_groups {
            if grouped.len() > max {
                return Err(TabstatError::Aggregation {
                    analysis,
                    message: format!("{} groups exceeds the limit of {}", grouped.len(), max),
                });
            }
        }

        self.group_summary(&analysis, &grouped);
        self.top_groups(&analysis, &grouped);
        for column in designated {
            self.group_means(&analysis, table, &grouped, column);
        }

        Ok(GroupingOutcome::Completed {
            label,
            groups: grouped.len(),
        })
    }

    fn group_summary(&mut self, analysis: &str, grouped: &GroupedRows<'_>) {
        use analysis_type::GROUP_SUMMARY;

        let sizes: NumericStats = grouped.sizes().map(|n| n as f64).collect();
        let (Some(min), Some(max), Some(mean)) = (sizes.min, sizes.max, sizes.mean) else {
            return;
        };

        self.push(analysis, GROUP_SUMMARY, "num_groups", grouped.len());
        self.push(analysis, GROUP_SUMMARY, "group_size_min", min as usize);
        self.push(analysis, GROUP_SUMMARY, "group_size_max", max as usize);
        self.push(analysis, GROUP_SUMMARY, "group_size_mean", mean);
    }

    fn top_groups(&mut self, analysis: &str, grouped: &GroupedRows<'_>) {
        for (i, (key, rows)) in grouped.largest(TOP_GROUPS).into_iter().enumerate() {
            let display = format!("{}:{}", grouped.describe_key(key), rows.len());
            self.push(
                analysis,
                analysis_type::TOP_GROUPS,
                &format!("top_group_{}", i + 1),
                display,
            );
        }
    }

    fn group_means(
        &mut self,
        analysis: &str,
        table: &DataTable,
        grouped: &GroupedRows<'_>,
        column: &str,
    ) {
        let Some(index) = table.column_index(column) else {
            debug!(column, "designated column not in header, skipping");
            return;
        };

        let means: NumericStats = grouped
            .iter()
            .filter_map(|(_, rows)| {
                NumericStats::from_values(rows.iter().map(|row| parse_numeric(field(row, index))))
                    .mean
            })
            .collect();

        if means.is_empty() {
            return;
        }

        self.push(analysis, column, "group_means_count", means.count);
        self.push(analysis, column, "group_means_mean", means.mean);
        self.push(analysis, column, "group_means_min", means.min);
        self.push(analysis, column, "group_means_max", means.max);
    }
}
