//! Nearest neighbours by cosine distance
//!
//! Ranks every row of a percentile matrix by cosine distance to a reference
//! vector. The reference row itself is included (distance `0.0`). A row with
//! zero magnitude, or a zero reference, sits at distance `1.0`.

use pitchscout_stats::distance::cosine_distance;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedRow {
    /// Row index into the population matrix.
    pub row: usize,
    pub distance: f64,
}

/// Ranks population rows by distance to `reference`, most similar first.
///
/// Equal distances keep population order.
///
/// ```
/// use pitchscout_analysis::similarity::rank_by_similarity;
///
/// let population = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.1]];
/// let ranked = rank_by_similarity(&population[0], &population);
/// let order = ranked.iter().map(|r| r.row).collect::<Vec<_>>();
/// assert_eq!(order, [0, 2, 1]);
/// assert_eq!(ranked[0].distance, 0.0);
/// ```
#[must_use]
pub fn rank_by_similarity<R>(reference: &[f64], population: &[R]) -> Vec<RankedRow>
where
    R: AsRef<[f64]>,
{
    let mut ranked = population
        .iter()
        .enumerate()
        .map(|(row, values)| RankedRow {
            row,
            distance: cosine_distance(reference, values.as_ref()),
        })
        .collect::<Vec<_>>();
    // stable: ties stay in population order
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}
