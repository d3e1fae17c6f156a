//! Column statistics: type classification and numeric/categorical summaries.
//!
//! Everything here is hand-rolled over plain string values so that the
//! engine does not depend on a dataframe library.

mod categorical;
mod classify;
mod column;
mod numeric;

pub use categorical::{CategoricalSummary, TOP_K, value_counts};
pub use classify::{ColumnKind, classify, is_numeric, parse_numeric};
pub use column::{ColumnStats, ColumnSummary};
pub use numeric::NumericStats;
