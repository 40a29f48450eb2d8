/// Divisor used when turning squared deviations into a variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispersion {
    /// Divide by `n` (population variance).
    Population,
    /// Divide by `n - 1` (Bessel-corrected sample variance).
    Sample,
}

/// Descriptive statistics summarizing a dataset.
///
/// This structure contains common measures of central tendency and
/// dispersion for a dataset of `f64` values.
#[derive(Debug, Clone)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset (upper median for even counts).
    pub median: f64,
    /// Sum of squared deviations from the mean.
    sum_sq_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// The values are sorted internally before anything is summed, so the
    /// result does not depend on the order the values arrive in.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use pitchscout_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pitchscout_stats::descriptive::DescriptiveStats;
    /// let mut values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// values.sort_by(f64::total_cmp);
    /// let stats = DescriptiveStats::from_sorted(&values).unwrap();
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.max, 5.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let mean = sorted_values.iter().sum::<f64>() / count as f64;
        let median = sorted_values[count / 2];
        let sum_sq_dev = sorted_values.iter().map(|v| (v - mean).powi(2)).sum();

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            sum_sq_dev,
        })
    }

    /// Variance under the given divisor.
    ///
    /// Returns `None` when the divisor would be zero (sample variance of a
    /// single value).
    ///
    /// ```
    /// # use pitchscout_stats::descriptive::{DescriptiveStats, Dispersion};
    /// let stats = DescriptiveStats::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    /// assert_eq!(stats.variance(Dispersion::Population), Some(4.0));
    /// assert_eq!(DescriptiveStats::new([1.0]).unwrap().variance(Dispersion::Sample), None);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn variance(&self, dispersion: Dispersion) -> Option<f64> {
        let divisor = match dispersion {
            Dispersion::Population => self.count,
            Dispersion::Sample => self.count.checked_sub(1)?,
        };
        if divisor == 0 {
            return None;
        }
        Some(self.sum_sq_dev / divisor as f64)
    }

    /// Standard deviation under the given divisor.
    #[must_use]
    pub fn std_dev(&self, dispersion: Dispersion) -> Option<f64> {
        self.variance(dispersion).map(f64::sqrt)
    }

    /// Standard score of `value` against this dataset.
    ///
    /// A dataset without spread (all values equal, or zero or undefined
    /// standard deviation) maps every value to `0.0`.
    ///
    /// ```
    /// # use pitchscout_stats::descriptive::{DescriptiveStats, Dispersion};
    /// let stats = DescriptiveStats::new([1.0, 3.0]).unwrap();
    /// assert_eq!(stats.z_score(3.0, Dispersion::Population), 1.0);
    ///
    /// let flat = DescriptiveStats::new([7.0, 7.0, 7.0]).unwrap();
    /// assert_eq!(flat.z_score(7.0, Dispersion::Population), 0.0);
    /// ```
    #[expect(clippy::float_cmp)]
    #[must_use]
    pub fn z_score(&self, value: f64, dispersion: Dispersion) -> f64 {
        // the mean of equal decimals can be off by an ulp, leaving a tiny nonzero std
        if self.min == self.max {
            return 0.0;
        }
        match self.std_dev(dispersion) {
            Some(std_dev) if std_dev > 0.0 && std_dev.is_finite() => (value - self.mean) / std_dev,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_variance_uses_bessel_correction() {
        let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.variance(Dispersion::Population), Some(1.25));
        let sample = stats.variance(Dispersion::Sample).unwrap();
        assert!((sample - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_statistics_do_not_depend_on_input_order() {
        let forward = [0.1, 0.7, 1e9, 0.3, 2.5, 1e-9];
        let mut backward = forward;
        backward.reverse();
        let a = DescriptiveStats::new(forward).unwrap();
        let b = DescriptiveStats::new(backward).unwrap();
        assert_eq!(a.mean.to_bits(), b.mean.to_bits());
        assert_eq!(
            a.std_dev(Dispersion::Sample).unwrap().to_bits(),
            b.std_dev(Dispersion::Sample).unwrap().to_bits()
        );
    }

    #[test]
    fn test_empty_dataset() {
        assert!(DescriptiveStats::new(Vec::<f64>::new()).is_none());
    }

    #[test]
    fn test_equal_inexact_decimals_have_zero_z_score() {
        for v in [0.1, 0.7, 12.3] {
            let stats = DescriptiveStats::new([v; 3]).unwrap();
            assert_eq!(stats.z_score(v, Dispersion::Population), 0.0, "v={v}");
            assert_eq!(stats.z_score(v, Dispersion::Sample), 0.0, "v={v}");
        }
    }

    #[test]
    fn test_single_value_sample_z_score_is_zero() {
        let stats = DescriptiveStats::new([42.0]).unwrap();
        assert_eq!(stats.z_score(42.0, Dispersion::Sample), 0.0);
        assert_eq!(stats.z_score(42.0, Dispersion::Population), 0.0);
    }
}
