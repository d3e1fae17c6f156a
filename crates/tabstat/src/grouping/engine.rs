//! Hash-based grouping that keeps first-seen key order.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{Result, TabstatError};
use crate::input::{DataTable, field};

/// Values of the grouping columns for one group, in column order.
pub type GroupKey = Vec<String>;

/// Rows of a table partitioned by the values of one or more columns.
///
/// Groups iterate in the order their key was first seen; rows within a group
/// keep their original order.
#[derive(Debug, Clone)]
pub struct GroupedRows<'a> {
    columns: Vec<String>,
    groups: IndexMap<GroupKey, Vec<&'a [String]>>,
}

impl<'a> GroupedRows<'a> {
    /// Group every row of `table` by the named columns.
    ///
    /// Names missing from the header are dropped from the key. If none of
    /// them exist the request fails with `ColumnNotFound`.
    pub fn build(table: &'a DataTable, columns: &[String]) -> Result<Self> {
        let resolved: Vec<(String, usize)> = columns
            .iter()
            .filter_map(|name| table.column_index(name).map(|idx| (name.clone(), idx)))
            .collect();

        if resolved.is_empty() {
            return Err(TabstatError::ColumnNotFound {
                columns: columns.to_vec(),
            });
        }

        let mut groups: IndexMap<GroupKey, Vec<&'a [String]>> = IndexMap::new();
        for row in &table.rows {
            let key: GroupKey = resolved
                .iter()
                .map(|(_, idx)| field(row, *idx).to_string())
                .collect();
            groups.entry(key).or_default().push(row.as_slice());
        }

        let columns: Vec<String> = resolved.into_iter().map(|(name, _)| name).collect();
        debug!(columns = ?columns, groups = groups.len(), "grouped rows");

        Ok(Self { columns, groups })
    }

    /// The grouping columns that were found in the header.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no groups (the table had no rows).
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &[&'a [String]])> {
        self.groups.iter().map(|(key, rows)| (key, rows.as_slice()))
    }

    /// Member rows of a group.
    pub fn get(&self, key: &[String]) -> Option<&[&'a [String]]> {
        self.groups.get(key).map(|rows| rows.as_slice())
    }

    /// Group sizes in first-seen order.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.values().map(|rows| rows.len())
    }

    /// The `n` largest groups, largest first.
    ///
    /// Equal sizes keep first-seen order.
    pub fn largest(&self, n: usize) -> Vec<(&GroupKey, &[&'a [String]])> {
        let mut ordered: Vec<_> = self.iter().collect();
        ordered.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        ordered.truncate(n);
        ordered
    }

    /// Render a key as `col=value | col=value`.
    pub fn describe_key(&self, key: &[String]) -> String {
        self.columns
            .iter()
            .zip(key)
            .map(|(col, value)| format!("{}={}", col, value))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
