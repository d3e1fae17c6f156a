//! Multi-column grouping of table rows.

mod engine;

pub use engine::{GroupKey, GroupedRows};
