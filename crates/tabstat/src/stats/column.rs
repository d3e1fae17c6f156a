//! Whole-column summaries combining classification and the summarizers.

use serde::{Deserialize, Serialize};

use super::categorical::CategoricalSummary;
use super::classify::{ColumnKind, classify, parse_numeric};
use super::numeric::NumericStats;
use crate::input::DataTable;

/// Statistics computed for a column, depending on its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnStats {
    Numeric(NumericStats),
    Categorical(CategoricalSummary),
}

/// Summary of one column over a set of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column name.
    pub name: String,
    /// Number of values, missing included.
    pub total_count: usize,
    /// Number of non-empty values.
    pub non_null_count: usize,
    /// Kind-specific statistics.
    pub stats: ColumnStats,
}

impl ColumnSummary {
    /// Classify the values, then summarize them accordingly.
    pub fn from_values(name: impl Into<String>, values: &[&str]) -> Self {
        let total_count = values.len();
        let non_null_count = values.iter().filter(|v| !DataTable::is_missing(v)).count();

        let stats = match classify(values.iter().copied()) {
            ColumnKind::Numeric => ColumnStats::Numeric(NumericStats::from_values(
                values.iter().map(|v| parse_numeric(v)),
            )),
            ColumnKind::Categorical => {
                ColumnStats::Categorical(CategoricalSummary::from_values(values.iter().copied()))
            }
        };

        Self {
            name: name.into(),
            total_count,
            non_null_count,
            stats,
        }
    }

    /// Summarize the column at `index` of a table.
    pub fn from_table(table: &DataTable, index: usize) -> Self {
        let values: Vec<&str> = table.column_values(index).collect();
        let name = table.headers.get(index).cloned().unwrap_or_default();
        Self::from_values(name, &values)
    }

    /// The kind the column was classified as.
    pub fn kind(&self) -> ColumnKind {
        match self.stats {
            ColumnStats::Numeric(_) => ColumnKind::Numeric,
            ColumnStats::Categorical(_) => ColumnKind::Categorical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_column() {
        let summary = ColumnSummary::from_values("spend", &["10", "20", "", "abc"]);
        assert_eq!(summary.total_count, 4);
        assert_eq!(summary.non_null_count, 3);
        assert_eq!(summary.kind(), ColumnKind::Categorical);

        let summary = ColumnSummary::from_values("spend", &["10", "20", "", "30"]);
        assert_eq!(summary.kind(), ColumnKind::Numeric);
        match summary.stats {
            ColumnStats::Numeric(stats) => {
                assert_eq!(stats.count, 3);
                assert_eq!(stats.mean, Some(20.0));
            }
            other => panic!("expected numeric stats, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_entries_excluded_from_count() {
        let summary = ColumnSummary::from_values("x", &["1", "2", "3", "n/a", ""]);
        match summary.stats {
            ColumnStats::Numeric(stats) => assert_eq!(stats.count + 2, summary.total_count),
            other => panic!("expected numeric stats, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_column_is_categorical() {
        let summary = ColumnSummary::from_values("notes", &["", ""]);
        assert_eq!(summary.non_null_count, 0);
        match summary.stats {
            ColumnStats::Categorical(cat) => assert_eq!(cat.unique_count, 0),
            other => panic!("expected categorical stats, got {:?}", other),
        }
    }

    #[test]
    fn test_from_table() {
        let table = DataTable::from_rows(&["id", "n"], &[&["a", "1"], &["b", "2"]]);
        let summary = ColumnSummary::from_table(&table, 1);
        assert_eq!(summary.name, "n");
        assert_eq!(summary.kind(), ColumnKind::Numeric);
    }
}
