//! Numeric-vs-categorical classification of raw column values.

use serde::{Deserialize, Serialize};

use crate::input::DataTable;

/// How a column's values are summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// More than half of all values parse as numbers.
    Numeric,
    /// Everything else, including entirely empty columns.
    Categorical,
}

impl ColumnKind {
    /// Returns true if this kind is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Categorical => write!(f, "categorical"),
        }
    }
}

/// Coerce a raw value to a float.
///
/// Missing values and anything that fails decimal float parsing yield
/// `None`. Surrounding whitespace is ignored; sign, exponent and the
/// `inf`/`nan` spellings are accepted.
pub fn parse_numeric(value: &str) -> Option<f64> {
    if DataTable::is_missing(value) {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Check if a value can be converted to a number.
pub fn is_numeric(value: &str) -> bool {
    parse_numeric(value).is_some()
}

/// Classify a column from all of its values.
///
/// Numeric iff strictly more than half of the values (missing ones included
/// in the denominator) are numeric.
pub fn classify<'a>(values: impl IntoIterator<Item = &'a str>) -> ColumnKind {
    let mut total = 0usize;
    let mut numeric = 0usize;
    for value in values {
        total += 1;
        if is_numeric(value) {
            numeric += 1;
        }
    }

    if numeric * 2 > total {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("10"), Some(10.0));
        assert_eq!(parse_numeric("-2.5"), Some(-2.5));
        assert_eq!(parse_numeric("+3"), Some(3.0));
        assert_eq!(parse_numeric("1e3"), Some(1000.0));
        assert_eq!(parse_numeric(".5"), Some(0.5));
        assert_eq!(parse_numeric(" 42 "), Some(42.0));
        assert!(parse_numeric("inf").unwrap().is_infinite());
        assert!(parse_numeric("nan").unwrap().is_nan());
    }

    #[test]
    fn test_parse_numeric_rejects() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric(" "), None);
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("1,000"), None);
        assert_eq!(parse_numeric("1e"), None);
        assert_eq!(parse_numeric("$5"), None);
    }

    #[test]
    fn test_classify_numeric_majority() {
        assert_eq!(classify(["1", "2", "x"]), ColumnKind::Numeric);
        assert_eq!(classify(["1", "2", "", ""]), ColumnKind::Categorical);
        assert_eq!(classify(["1", "2", "3", ""]), ColumnKind::Numeric);
    }

    #[test]
    fn test_classify_exactly_half_is_categorical() {
        assert!(!classify(["1", "a"]).is_numeric());
        assert_eq!(classify(["1", "a"]), ColumnKind::Categorical);
    }

    #[test]
    fn test_classify_empty_column() {
        assert_eq!(classify(["", "", ""]), ColumnKind::Categorical);
        assert_eq!(classify(std::iter::empty::<&str>()), ColumnKind::Categorical);
    }

    #[test]
    fn test_classify_single_value() {
        assert!(classify(["7"]).is_numeric());
    }
}
