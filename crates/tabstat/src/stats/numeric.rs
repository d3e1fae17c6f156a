//! Numeric summaries: count, mean, min, max and sample standard deviation.

use serde::{Deserialize, Serialize};

/// Summary of a numeric sample.
///
/// All optional fields are `None` when `count == 0`, so an empty sample is
/// never confused with a sample of zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    /// Number of non-missing values.
    pub count: usize,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Sample standard deviation; `Some(0.0)` for a single value.
    pub std: Option<f64>,
}

impl NumericStats {
    /// Summarize values, skipping missing entries.
    pub fn from_values(values: impl IntoIterator<Item = Option<f64>>) -> Self {
        values.into_iter().flatten().collect()
    }

    /// Returns true if no values were summarized.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Summarize a slice of present values.
    ///
    /// The mean is `sum / count` over a left-to-right sum. The variance is
    /// the second pass `Σ(x - mean)² / (count - 1)`.
    pub fn from_slice(values: &[f64]) -> Self {
        let Some((&first, _)) = values.split_first() else {
            return Self::default();
        };

        let count = values.len();
        let (sum, min, max) = values
            .iter()
            .fold((0.0, first, first), |(sum, min, max), &x| {
                (sum + x, min.min(x), max.max(x))
            });
        let mean = sum / count as f64;

        let std = if count < 2 {
            0.0
        } else {
            let m2: f64 = values.iter().map(|x| (x - mean).powi(2)).sum();
            (m2 / (count - 1) as f64).sqrt()
        };

        Self {
            count,
            mean: Some(mean),
            min: Some(min),
            max: Some(max),
            std: Some(std),
        }
    }
}

impl FromIterator<f64> for NumericStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let values: Vec<f64> = iter.into_iter().collect();
        Self::from_slice(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_basic_stats() {
        let stats: NumericStats = [1.0, 2.0, 3.0, 4.0].into_iter().collect();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, Some(2.5));
        assert_eq!(stats.min, Some(1.0));
        assert_eq!(stats.max, Some(4.0));
        // Sample variance of 1..4 is 5/3
        assert!(approx(stats.std.unwrap(), (5.0f64 / 3.0).sqrt()));
    }

    #[test]
    fn test_bessel_correction() {
        let stats: NumericStats = [2.0, 1.0].into_iter().collect();
        assert_eq!(stats.mean, Some(1.5));
        assert!(approx(stats.std.unwrap(), std::f64::consts::FRAC_1_SQRT_2));
    }

    #[test]
    fn test_single_value_std_is_zero() {
        let stats: NumericStats = [42.0].into_iter().collect();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.std, Some(0.0));
        assert_eq!(stats.min, Some(42.0));
        assert_eq!(stats.max, Some(42.0));
    }

    #[test]
    fn test_empty_is_not_available() {
        let stats = NumericStats::from_values([None, None]);
        assert!(stats.is_empty());
        assert_eq!(stats.mean, None);
        assert_eq!(stats.std, None);

        let zeros: NumericStats = [0.0, 0.0].into_iter().collect();
        assert_ne!(stats, zeros);
        assert_eq!(zeros.mean, Some(0.0));
        assert_eq!(zeros.std, Some(0.0));
    }

    #[test]
    fn test_missing_entries_filtered() {
        let stats = NumericStats::from_values([Some(10.0), None, Some(20.0)]);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, Some(15.0));
    }

    #[test]
    fn test_mean_is_sum_over_count() {
        let stats: NumericStats = [100.0, 200.0, 50.0].into_iter().collect();
        assert_eq!(stats.mean, Some(350.0 / 3.0));
        assert_eq!(stats.mean.unwrap().to_string(), "116.66666666666667");

        let means: NumericStats = [350.0 / 3.0, 10.0].into_iter().collect();
        assert_eq!(format!("{:?}", means.mean.unwrap()), "63.333333333333336");
    }

    #[test]
    fn test_from_slice_matches_collect() {
        let values = [3.5, -1.25, 8.0, 0.0];
        let collected: NumericStats = values.iter().copied().collect();
        assert_eq!(NumericStats::from_slice(&values), collected);
        assert_eq!(NumericStats::from_slice(&[]), NumericStats::default());
    }

    #[test]
    fn test_negative_values() {
        let stats: NumericStats = [-5.0, 5.0, -10.0].into_iter().collect();
        assert_eq!(stats.min, Some(-10.0));
        assert_eq!(stats.max, Some(5.0));
        assert!(approx(stats.mean.unwrap(), -10.0 / 3.0));
    }
}
