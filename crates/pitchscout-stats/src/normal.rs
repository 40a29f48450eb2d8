//! Standard normal distribution helpers.

use statrs::distribution::{ContinuousCDF, Normal};

/// Cumulative distribution function of the standard normal distribution.
///
/// `standard_normal_cdf(0.0)` is exactly `0.5`.
///
/// ```
/// use pitchscout_stats::normal::standard_normal_cdf;
///
/// assert_eq!(standard_normal_cdf(0.0), 0.5);
/// assert!((standard_normal_cdf(1.0) - 0.841_344_746_068_543).abs() < 1e-12);
/// assert!((standard_normal_cdf(-1.959_964) - 0.025).abs() < 1e-6);
/// ```
#[must_use]
pub fn standard_normal_cdf(z: f64) -> f64 {
    Normal::standard().cdf(z)
}

/// Maps a standard score to a percentile in `[0, 100]`.
///
/// ```
/// use pitchscout_stats::normal::z_to_percentile;
///
/// assert_eq!(z_to_percentile(0.0), 50.0);
/// assert!(z_to_percentile(2.0) > 97.0);
/// ```
#[must_use]
pub fn z_to_percentile(z: f64) -> f64 {
    standard_normal_cdf(z) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdf_is_monotonic() {
        let mut prev = standard_normal_cdf(-8.0);
        for step in 1..=1600 {
            let z = -8.0 + f64::from(step) * 0.01;
            let cur = standard_normal_cdf(z);
            assert!(cur >= prev, "cdf decreased at z={z}");
            prev = cur;
        }
    }

    #[test]
    fn test_cdf_is_symmetric_around_zero() {
        for z in [0.1, 0.5, 1.0, 1.5, 2.5, 4.0] {
            let sum = standard_normal_cdf(z) + standard_normal_cdf(-z);
            assert!((sum - 1.0).abs() < 1e-12, "z={z}");
        }
    }

    #[test]
    fn test_cdf_matches_reference_values() {
        // scipy.stats.norm.cdf
        let cases = [
            (0.1, 0.539_827_837_277_028_9),
            (2.0, 0.977_249_868_051_820_8),
            (-1.0, 0.158_655_253_931_457_05),
        ];
        for (z, expected) in cases {
            assert!((standard_normal_cdf(z) - expected).abs() < 1e-12, "z={z}");
        }
    }

    #[test]
    fn test_center_and_tails() {
        assert_eq!(z_to_percentile(0.0), 50.0);
        assert_eq!(standard_normal_cdf(f64::INFINITY), 1.0);
        assert_eq!(standard_normal_cdf(f64::NEG_INFINITY), 0.0);
        assert!(standard_normal_cdf(40.0) <= 1.0);
    }
}
