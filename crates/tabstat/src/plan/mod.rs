//! Declarative analysis plans: which columns to group by and which numeric
//! columns get per-group mean reporting.

mod preset;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TabstatError};

pub use preset::Preset;

/// One group-by request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GroupingSpecRepr")]
pub struct GroupingSpec {
    /// Columns forming the group key, in order.
    pub columns: Vec<String>,
    /// Name used in `Grouped_<label>` records. Defaults to the columns
    /// joined with `_`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl GroupingSpec {
    /// Group by the given columns with the default label.
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            label: None,
        }
    }

    /// Override the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The label used for this grouping's records.
    pub fn label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.columns.join("_"))
    }
}

/// Accepts either `["a", "b"]` or `{"columns": ["a", "b"], "label": "x"}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum GroupingSpecRepr {
    Columns(Vec<String>),
    Full {
        columns: Vec<String>,
        #[serde(default)]
        label: Option<String>,
    },
}

impl From<GroupingSpecRepr> for GroupingSpec {
    fn from(repr: GroupingSpecRepr) -> Self {
        match repr {
            GroupingSpecRepr::Columns(columns) => Self {
                columns,
                label: None,
            },
            GroupingSpecRepr::Full { columns, label } => Self { columns, label },
        }
    }
}

/// Per-dataset analysis plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisPlan {
    /// Group-by requests, analyzed in order.
    #[serde(default)]
    pub group_by: Vec<GroupingSpec>,
    /// Numeric columns whose per-group means are summarized.
    #[serde(default)]
    pub designated_numeric_columns: Vec<String>,
}

impl AnalysisPlan {
    /// Create an empty plan (overall column analysis only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group-by request.
    pub fn with_grouping<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.group_by.push(GroupingSpec::new(columns));
        self
    }

    /// Add a designated numeric column.
    pub fn with_designated(mut self, column: impl Into<String>) -> Self {
        self.designated_numeric_columns.push(column.into());
        self
    }

    /// Parse a plan from JSON text.
    ///
    /// A group-by entry with no columns is kept; the run reports it as a
    /// skipped grouping.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a plan from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| TabstatError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&text)
    }
}
