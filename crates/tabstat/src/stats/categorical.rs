//! Frequency counts for categorical columns.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::DataTable;

/// Number of most-frequent values kept in a summary.
pub const TOP_K: usize = 5;

/// Unique-value count and the most frequent values of a column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    /// Number of distinct non-missing values.
    pub unique_count: usize,
    /// Up to `TOP_K` (value, count) pairs, highest count first.
    pub most_frequent: Vec<(String, usize)>,
}

impl CategoricalSummary {
    /// Summarize raw values. Missing values are not counted.
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        Self::with_top_k(values, TOP_K)
    }

    /// Summarize raw values keeping at most `k` ranked entries.
    pub fn with_top_k<'a>(values: impl IntoIterator<Item = &'a str>, k: usize) -> Self {
        let counts = value_counts(values);
        let unique_count = counts.len();

        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        // Stable: equal counts keep first-seen order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);

        Self {
            unique_count,
            most_frequent: ranked
                .into_iter()
                .map(|(value, count)| (value.to_string(), count))
                .collect(),
        }
    }

    /// The single most frequent value, if any.
    pub fn mode(&self) -> Option<&str> {
        self.most_frequent.first().map(|(v, _)| v.as_str())
    }
}

/// Count non-missing values in first-seen order.
pub fn value_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> IndexMap<&'a str, usize> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for value in values {
        if DataTable::is_missing(value) {
            continue;
        }
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}
