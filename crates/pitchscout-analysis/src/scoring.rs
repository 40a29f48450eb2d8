//! Category scores
//!
//! A category score rolls one metric subgroup of a player's key-metrics
//! percentile row into a single integer:
//!
//! ```text
//! score = round(offset + slope × mean percentile)
//! ```
//!
//! With the default scale (40, 0.6) scores fall in `[40, 100]`. Rounding is
//! half-to-even.

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{self, StatGroup},
    normalize::PercentileRow,
};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ScoreError {
    #[display("column '{column}' of subgroup '{group}' is not in the percentile row")]
    MissingColumn { group: String, column: String },
    #[display("subgroup '{group}' has no columns")]
    EmptyGroup { group: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Category {
    Defending,
    Passing,
    Carrying,
    Creation,
    Shooting,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Defending,
        Self::Passing,
        Self::Carrying,
        Self::Creation,
        Self::Shooting,
    ];

    #[must_use]
    pub fn metrics(self) -> StatGroup {
        match self {
            Self::Defending => catalog::DEFENDING_METRICS,
            Self::Passing => catalog::PASSING_METRICS,
            Self::Carrying => catalog::CARRYING_METRICS,
            Self::Creation => catalog::CREATION_METRICS,
            Self::Shooting => catalog::SHOOTING_METRICS,
        }
    }
}

/// Affine map from mean percentile to score.
///
/// The defaults are the dashboard's presentation band. They are kept as
/// data so they can be tuned, but changing them changes every score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreScale {
    pub offset: f64,
    pub slope: f64,
}

impl Default for ScoreScale {
    fn default() -> Self {
        Self {
            offset: 40.0,
            slope: 0.6,
        }
    }
}

impl ScoreScale {
    /// Scores one subgroup of a percentile row.
    #[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn score(&self, row: &PercentileRow<'_>, group: &StatGroup) -> Result<i32, ScoreError> {
        if group.is_empty() {
            return Err(ScoreError::EmptyGroup {
                group: group.name.to_owned(),
            });
        }
        let mut sum = 0.0;
        for column in group.columns {
            sum += row.get(column).ok_or_else(|| ScoreError::MissingColumn {
                group: group.name.to_owned(),
                column: (*column).to_owned(),
            })?;
        }
        let mean = sum / group.len() as f64;
        Ok((self.offset + self.slope * mean).round_ties_even() as i32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: i32,
}

/// Scores one subgroup with the default scale.
pub fn category_score(row: &PercentileRow<'_>, group: &StatGroup) -> Result<i32, ScoreError> {
    ScoreScale::default().score(row, group)
}

/// Scores all five categories.
pub fn category_scores(
    row: &PercentileRow<'_>,
    scale: &ScoreScale,
) -> Result<Vec<CategoryScore>, ScoreError> {
    Category::ALL
        .iter()
        .map(|&category| -> Result<_, ScoreError> {
            Ok(CategoryScore {
                category,
                score: scale.score(row, &category.metrics())?,
            })
        })
        .collect()
}
