//! Vector similarity measures.

/// Cosine similarity between two vectors.
///
/// Returns `None` if either vector has zero magnitude, where the similarity
/// is undefined. Extra trailing elements of the longer vector are ignored.
///
/// The result is exactly symmetric in its arguments, and exactly `1.0` for a
/// non-zero vector compared with itself.
///
/// ```
/// use pitchscout_stats::distance::cosine_similarity;
///
/// assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), Some(0.0));
/// assert_eq!(cosine_similarity(&[3.0, 4.0], &[3.0, 4.0]), Some(1.0));
/// assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), None);
/// ```
#[must_use]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Option<f64> {
    let mut dot = 0.0;
    let mut mag_a = 0.0;
    let mut mag_b = 0.0;

    for (&ai, &bi) in a.iter().zip(b) {
        dot += ai * bi;
        mag_a += ai * ai;
        mag_b += bi * bi;
    }

    // sqrt of the product (not the product of sqrts) keeps `a == b` at exactly 1.0
    let denom = (mag_a * mag_b).sqrt();
    if !(denom.is_finite() && denom > 0.0) {
        return None;
    }

    Some((dot / denom).clamp(-1.0, 1.0))
}

/// Cosine distance: `1.0 - cosine_similarity`.
///
/// Returns `1.0` (maximal for non-negative data) if either vector has zero
/// magnitude.
///
/// ```
/// use pitchscout_stats::distance::cosine_distance;
///
/// assert_eq!(cosine_distance(&[0.2, 0.9, 0.4], &[0.2, 0.9, 0.4]), 0.0);
/// assert_eq!(cosine_distance(&[1.0, 0.0], &[0.0, 1.0]), 1.0);
/// assert_eq!(cosine_distance(&[0.0, 0.0], &[0.0, 0.0]), 1.0);
/// ```
#[must_use]
pub fn cosine_distance(a: &[f64], b: &[f64]) -> f64 {
    cosine_similarity(a, b).map_or(1.0, |similarity| 1.0 - similarity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_distance_is_exactly_zero() {
        let rows = [
            vec![12.5, 77.1, 3.3, 99.9, 0.01],
            vec![50.0; 41],
            vec![0.1, 0.2, 0.3],
            vec![1e-3, 4e2, 7.77],
        ];
        for row in &rows {
            assert_eq!(cosine_distance(row, row), 0.0, "row {row:?}");
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = [13.2, 88.4, 51.0, 3.9, 70.1];
        let b = [40.0, 12.7, 66.6, 95.3, 8.8];
        assert_eq!(
            cosine_distance(&a, &b).to_bits(),
            cosine_distance(&b, &a).to_bits()
        );
    }

    #[test]
    fn test_scaled_vector_has_near_zero_distance() {
        let a = [1.0, 2.0, 3.0];
        let b = [2.0, 4.0, 6.0];
        assert!(cosine_distance(&a, &b).abs() < 1e-12);
    }

    #[test]
    fn test_opposite_vectors() {
        assert_eq!(cosine_distance(&[1.0, -1.0], &[-1.0, 1.0]), 2.0);
    }
}
