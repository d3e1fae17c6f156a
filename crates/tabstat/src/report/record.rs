//! The atomic unit of the report.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed analysis-type and column labels used in records.
pub mod analysis_type {
    /// Dataset-level facts (row and column counts).
    pub const DATASET_INFO: &str = "Dataset_Info";
    /// Column name used for dataset-level facts.
    pub const BASIC: &str = "BASIC";
    /// Whole-table per-column analysis.
    pub const OVERALL: &str = "Overall";
    /// Column name for group-count and group-size records.
    pub const GROUP_SUMMARY: &str = "GROUP_SUMMARY";
    /// Column name for the largest-groups records.
    pub const TOP_GROUPS: &str = "TOP_GROUPS";

    /// Analysis type for a grouping request.
    pub fn grouped(label: &str) -> String {
        format!("Grouped_{}", label)
    }
}

/// Value of a single metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// An exact count.
    Count(usize),
    /// A computed statistic.
    Number(f64),
    /// Free text, such as `value:count` pairs.
    Text(String),
    /// Not available (e.g. the mean of zero values).
    Missing,
}

impl MetricValue {
    /// The value as a float, if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Count(n) => Some(*n as f64),
            MetricValue::Number(x) => Some(*x),
            _ => None,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{}", n),
            // Debug keeps the shortest round-trip digits and a trailing ".0".
            MetricValue::Number(x) => write!(f, "{:?}", x),
            MetricValue::Text(s) => f.write_str(s),
            MetricValue::Missing => Ok(()),
        }
    }
}

impl From<usize> for MetricValue {
    fn from(n: usize) -> Self {
        MetricValue::Count(n)
    }
}

impl From<f64> for MetricValue {
    fn from(x: f64) -> Self {
        MetricValue::Number(x)
    }
}

impl From<Option<f64>> for MetricValue {
    fn from(x: Option<f64>) -> Self {
        x.map_or(MetricValue::Missing, MetricValue::Number)
    }
}

impl From<String> for MetricValue {
    fn from(s: String) -> Self {
        MetricValue::Text(s)
    }
}

impl From<&str> for MetricValue {
    fn from(s: &str) -> Self {
        MetricValue::Text(s.to_string())
    }
}

/// One (scope, column, metric, value) line of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub analysis_type: String,
    pub group_info: String,
    pub column_name: String,
    pub metric: String,
    pub value: MetricValue,
}

impl OutputRecord {
    /// Create a record with empty group info.
    pub fn new(
        analysis_type: impl Into<String>,
        column_name: impl Into<String>,
        metric: impl Into<String>,
        value: impl Into<MetricValue>,
    ) -> Self {
        Self {
            analysis_type: analysis_type.into(),
            group_info: String::new(),
            column_name: column_name.into(),
            metric: metric.into(),
            value: value.into(),
        }
    }

    /// Set the group info.
    pub fn with_group_info(mut self, group_info: impl Into<String>) -> Self {
        self.group_info = group_info.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_values() {
        assert_eq!(MetricValue::from(3usize).to_string(), "3");
        assert_eq!(MetricValue::from(15.0).to_string(), "15.0");
        assert_eq!(MetricValue::from(1.5).to_string(), "1.5");
        assert_eq!(
            MetricValue::from(std::f64::consts::FRAC_1_SQRT_2).to_string(),
            "0.7071067811865476"
        );
        assert_eq!(MetricValue::from("b:3").to_string(), "b:3");
        assert_eq!(MetricValue::from(None::<f64>).to_string(), "");
    }

    #[test]
    fn test_json_values() {
        let json = serde_json::to_string(&vec![
            MetricValue::Count(2),
            MetricValue::Number(1.5),
            MetricValue::Missing,
        ])
        .unwrap();
        assert_eq!(json, "[2,1.5,null]");
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(MetricValue::Count(2).as_f64(), Some(2.0));
        assert_eq!(MetricValue::Missing.as_f64(), None);
    }

    #[test]
    fn test_record_builder() {
        let record = OutputRecord::new("Overall", "spend", "mean", 15.0).with_group_info("p1");
        assert_eq!(record.group_info, "p1");
        assert_eq!(record.value, MetricValue::Number(15.0));
        assert_eq!(analysis_type::grouped("page_id"), "Grouped_page_id");
    }
}
