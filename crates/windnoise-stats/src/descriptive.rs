use crate::percentiles::Percentiles;

/// Error returned when a dataset cannot be summarized.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum SummaryError {
    /// The dataset contains no samples.
    #[display("no samples to summarize")]
    EmptyInput,
    /// A sample is NaN or infinite.
    #[display("invalid sample at index {index}: {value}")]
    InvalidData { index: usize, value: f64 },
}

/// Summary statistics of a set of samples.
///
/// Mirrors the conventional "describe" output: count, mean, sample standard
/// deviation, extrema and the three quartiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics {
    /// Number of samples.
    pub count: usize,
    /// The arithmetic mean of the samples.
    pub mean: f64,
    /// Sample standard deviation (`n - 1` denominator).
    ///
    /// Defined as `0.0` when there is only one sample.
    pub std_dev: f64,
    /// The minimum sample.
    pub min: f64,
    /// The 25th percentile.
    pub p25: f64,
    /// The 50th percentile.
    pub median: f64,
    /// The 75th percentile.
    pub p75: f64,
    /// The maximum sample.
    pub max: f64,
}

impl SummaryStatistics {
    /// Percentile points reported by [`SummaryStatistics`].
    pub const QUARTILES: [f64; 3] = [25.0, 50.0, 75.0];

    /// Computes summary statistics from unsorted values.
    ///
    /// # Errors
    ///
    /// * [`SummaryError::EmptyInput`] - if `values` is empty
    /// * [`SummaryError::InvalidData`] - if any value is NaN or infinite
    ///
    /// # Examples
    ///
    /// ```
    /// # use windnoise_stats::descriptive::SummaryStatistics;
    /// let stats = SummaryStatistics::new(&[5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    pub fn new(values: &[f64]) -> Result<Self, SummaryError> {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(SummaryError::InvalidData { index, value });
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Computes summary statistics from pre-sorted values.
    ///
    /// Skips the copy and sort done by [`SummaryStatistics::new`].
    ///
    /// # Errors
    ///
    /// Same as [`SummaryStatistics::new`].
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, SummaryError> {
        if let Some((index, &value)) = sorted_values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            return Err(SummaryError::InvalidData { index, value });
        }
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Err(SummaryError::EmptyInput);
        };
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let std_dev = if count > 1 {
            let sum_sq = sorted_values
                .iter()
                .map(|v| (v - mean).powi(2))
                .sum::<f64>();
            (sum_sq / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        let quartiles = Percentiles::from_sorted(sorted_values, &Self::QUARTILES);
        let &[(_, p25), (_, median), (_, p75)] = quartiles.as_slice() else {
            unreachable!()
        };

        Ok(Self {
            count,
            mean,
            std_dev,
            min,
            p25,
            median,
            p75,
            max,
        })
    }

    /// Returns the labelled rows in "describe" order.
    ///
    /// ```
    /// # use windnoise_stats::descriptive::SummaryStatistics;
    /// let stats = SummaryStatistics::new(&[1.0, 2.0]).unwrap();
    /// let labels = stats.rows().map(|(label, _)| label);
    /// assert_eq!(labels, ["mean", "std", "min", "25%", "50%", "75%", "max"]);
    /// ```
    #[must_use]
    pub fn rows(&self) -> [(&'static str, f64); 7] {
        [
            ("mean", self.mean),
            ("std", self.std_dev),
            ("min", self.min),
            ("25%", self.p25),
            ("50%", self.median),
            ("75%", self.p75),
            ("max", self.max),
        ]
    }
}
