/// Precomputed percentile values for a dataset.
///
/// This structure stores percentile-value pairs for efficient lookup
/// of commonly used percentile points.
///
/// # Examples
///
/// ```
/// use windnoise_stats::percentiles::Percentiles;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
///
/// assert_eq!(percentiles.get(50.0), Some(2.5));
/// assert_eq!(percentiles.get(25.0), Some(1.75));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Percentiles {
    /// Percentile-value pairs in the order they were requested.
    /// Each tuple contains (percentile, value) where percentile is 0.0-100.0.
    values: Vec<(f64, f64)>,
}

impl Percentiles {
    /// Computes percentiles from sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], percentile_points: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let values = percentile_points
            .iter()
            .map(|&p| (p, compute_percentile(sorted_values, p)))
            .collect();
        Self { values }
    }

    /// Computes percentiles from unsorted values.
    ///
    /// The values are copied and sorted internally. NaN and infinite values
    /// are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use windnoise_stats::percentiles::Percentiles;
    ///
    /// let values = [5.0, 2.0, 8.0, 1.0, 9.0];
    /// let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
    ///
    /// assert_eq!(percentiles.get(50.0), Some(5.0));
    /// ```
    #[must_use]
    pub fn new(values: &[f64], percentile_points: &[f64]) -> Self {
        let mut sorted = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, percentile_points)
    }

    /// Gets the value at a specific percentile.
    ///
    /// Returns `None` if the percentile was not precomputed.
    ///
    /// ```
    /// use windnoise_stats::percentiles::Percentiles;
    ///
    /// let percentiles = Percentiles::new(&[1.0, 2.0, 3.0, 4.0, 5.0], &[50.0, 95.0]);
    /// assert_eq!(percentiles.get(50.0), Some(3.0));
    /// assert_eq!(percentiles.get(25.0), None); // Not precomputed
    /// ```
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.values.iter().find_map(|(p, value)| {
            if (*p - percentile).abs() < f64::EPSILON {
                Some(*value)
            } else {
                None
            }
        })
    }

    /// Returns an iterator over all (percentile, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied()
    }

    /// Returns all percentile-value pairs as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.values
    }
}

/// Computes a single percentile value from sorted data.
///
/// Uses linear interpolation between the two closest order statistics.
/// For `n` values the fractional rank is `(n - 1) * percentile / 100`, and the
/// result is interpolated between the values at its floor and ceiling.
/// `percentile` is clamped to `0.0..=100.0`.
///
/// Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use windnoise_stats::percentiles::compute_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
///
/// assert_eq!(compute_percentile(&values, 0.0), 1.0);
/// assert_eq!(compute_percentile(&values, 50.0), 2.5);
/// assert_eq!(compute_percentile(&values, 75.0), 3.25);
/// assert_eq!(compute_percentile(&values, 100.0), 4.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    let Some(&last) = sorted_values.last() else {
        return f64::NAN;
    };
    let rank = (sorted_values.len() - 1) as f64 * percentile.clamp(0.0, 100.0) / 100.0;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if upper >= sorted_values.len() {
        return last;
    }
    let fraction = rank - rank.floor();
    let low = sorted_values[lower];
    let high = sorted_values[upper];
    low + (high - low) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value_is_every_percentile() {
        for p in [0.0, 25.0, 50.0, 75.0, 100.0] {
            assert_eq!(compute_percentile(&[7.5], p), 7.5);
        }
    }

    #[test]
    fn test_empty_is_nan() {
        assert!(compute_percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn test_odd_length_median_is_middle_value() {
        let values = [1.0, 3.0, 8.0, 10.0, 12.0];
        assert_eq!(compute_percentile(&values, 50.0), 8.0);
        assert_eq!(compute_percentile(&values, 25.0), 3.0);
        assert_eq!(compute_percentile(&values, 75.0), 10.0);
    }

    #[test]
    fn test_interpolates_between_order_statistics() {
        let values = [0.0, 10.0];
        assert!((compute_percentile(&values, 30.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_percentile_is_clamped() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(compute_percentile(&values, -10.0), 1.0);
        assert_eq!(compute_percentile(&values, 150.0), 3.0);
    }

    #[test]
    fn test_non_finite_values_are_ignored() {
        let percentiles = Percentiles::new(&[1.0, f64::NAN, 2.0, f64::INFINITY], &[50.0]);
        assert_eq!(percentiles.get(50.0), Some(1.5));
    }

    #[test]
    fn test_only_non_finite_values_give_nan() {
        let percentiles = Percentiles::new(&[f64::NAN, f64::NEG_INFINITY], &[50.0]);
        assert!(percentiles.get(50.0).is_some_and(f64::is_nan));
    }

    #[test]
    fn test_preserves_requested_order() {
        let percentiles = Percentiles::new(&[4.0, 1.0, 3.0, 2.0], &[75.0, 25.0]);
        assert_eq!(percentiles.as_slice(), &[(75.0, 3.25), (25.0, 1.75)]);
    }
}
