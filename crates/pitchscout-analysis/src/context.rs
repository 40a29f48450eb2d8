//! Query context
//!
//! [`ScoutContext`] owns the cleaned table and the three percentile views
//! derived from it. It is built once per load and every per-player query
//! reads from it without recomputing population statistics.
//!
//! | view | projection | policy | feeds |
//! |---|---|---|---|
//! | comparison | comparison columns | global | similar players |
//! | metrics | key-metric columns | global | category scores |
//! | positional | comparison columns | by position | on-screen percentiles |

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::info;

use crate::{
    catalog,
    clean::{CleanedTable, PlayerIdentity},
    normalize::{self, GroupingPolicy, NormalizeError, PercentileTable},
    scoring::{self, CategoryScore, ScoreError, ScoreScale},
    similarity,
};

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ProfileError {
    #[display("no player at row {row}")]
    #[from(ignore)]
    UnknownRow { row: usize },
    #[display("stat '{column}' is not part of the comparison columns")]
    #[from(ignore)]
    UnknownStat { column: String },
    #[display("failed to score player")]
    Score { source: ScoreError },
}

/// A stat's raw value and its percentile among positional peers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatLine {
    pub column: String,
    pub value: f64,
    pub percentile: f64,
}

/// Raw value of one touch zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TouchZone {
    pub column: String,
    pub share: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerProfile<'a> {
    pub identity: &'a PlayerIdentity,
    pub minutes: f64,
    pub scores: Vec<CategoryScore>,
    pub key_stats: Vec<StatLine>,
    pub all_stats: Vec<StatLine>,
    /// Attacking penalty area first.
    pub touches: Vec<TouchZone>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimilarPlayer<'a> {
    pub identity: &'a PlayerIdentity,
    pub distance: f64,
}

#[derive(Debug, Clone)]
pub struct ScoutContext {
    table: CleanedTable,
    scale: ScoreScale,
    comparison: PercentileTable,
    metrics: PercentileTable,
    positional: PercentileTable,
}

impl ScoutContext {
    /// Computes the three percentile views over `table`.
    pub fn new(table: CleanedTable, scale: ScoreScale) -> Result<Self, NormalizeError> {
        let comparison_columns = catalog::comparison_columns();
        let comparison =
            normalize::normalize(&table, &comparison_columns, GroupingPolicy::Global)?;
        let metrics = normalize::normalize(
            &table,
            &catalog::key_metric_columns(),
            GroupingPolicy::Global,
        )?;
        let positional =
            normalize::normalize(&table, &comparison_columns, GroupingPolicy::ByPosition)?;
        info!(players = table.len(), "built scout context");
        Ok(Self {
            table,
            scale,
            comparison,
            metrics,
            positional,
        })
    }

    #[must_use]
    pub fn table(&self) -> &CleanedTable {
        &self.table
    }

    #[must_use]
    pub fn comparison(&self) -> &PercentileTable {
        &self.comparison
    }

    #[must_use]
    pub fn metrics(&self) -> &PercentileTable {
        &self.metrics
    }

    #[must_use]
    pub fn positional(&self) -> &PercentileTable {
        &self.positional
    }

    /// Competitions, sorted.
    #[must_use]
    pub fn leagues(&self) -> Vec<&str> {
        self.identities()
            .map(|id| id.competition.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Clubs of one competition, sorted.
    #[must_use]
    pub fn clubs(&self, league: &str) -> Vec<&str> {
        self.identities()
            .filter(|id| id.competition == league)
            .map(|id| id.club.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Player names of one club in one competition, sorted.
    #[must_use]
    pub fn players(&self, league: &str, club: &str) -> Vec<&str> {
        self.identities()
            .filter(|id| id.competition == league && id.club == club)
            .map(|id| id.name.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// First row whose club and player name both match.
    #[must_use]
    pub fn find_player(&self, club: &str, name: &str) -> Option<usize> {
        self.identities()
            .position(|id| id.club == club && id.name == name)
    }

    /// Profile with the position's default key stats.
    pub fn profile(&self, row: usize) -> Result<PlayerProfile<'_>, ProfileError> {
        let record = self
            .table
            .record(row)
            .ok_or(ProfileError::UnknownRow { row })?;
        let key_stats = catalog::key_stats(record.identity.position);
        self.profile_with_key_stats(row, key_stats.columns)
    }

    /// Profile with a caller-chosen key stat list.
    pub fn profile_with_key_stats<S>(
        &self,
        row: usize,
        key_stats: &[S],
    ) -> Result<PlayerProfile<'_>, ProfileError>
    where
        S: AsRef<str>,
    {
        let record = self
            .table
            .record(row)
            .ok_or(ProfileError::UnknownRow { row })?;
        let metrics_row = self
            .metrics
            .row(row)
            .ok_or(ProfileError::UnknownRow { row })?;
        let scores = scoring::category_scores(&metrics_row, &self.scale)?;

        let key_stats = key_stats
            .iter()
            .map(|column| self.stat_line(row, column.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let all_stats = self
            .positional
            .columns()
            .iter()
            .map(|column| self.stat_line(row, column))
            .collect::<Result<Vec<_>, _>>()?;
        let touches = catalog::TOUCHES
            .columns
            .iter()
            .rev()
            .map(|&column| -> Result<TouchZone, ProfileError> {
                let index = self.table.stat_index(column).ok_or_else(|| {
                    ProfileError::UnknownStat {
                        column: column.to_owned(),
                    }
                })?;
                Ok(TouchZone {
                    column: column.to_owned(),
                    share: record.stats()[index],
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PlayerProfile {
            identity: &record.identity,
            minutes: record.minutes,
            scores,
            key_stats,
            all_stats,
            touches,
        })
    }

    /// Players ranked by cosine distance on the global comparison view,
    /// starting with the player itself. `limit` caps the list length.
    pub fn similar_players(
        &self,
        row: usize,
        limit: Option<usize>,
    ) -> Result<Vec<SimilarPlayer<'_>>, ProfileError> {
        let reference = self
            .comparison
            .row(row)
            .ok_or(ProfileError::UnknownRow { row })?;
        let ranked = similarity::rank_by_similarity(reference.values(), self.comparison.matrix());
        let limit = limit.unwrap_or(ranked.len());
        Ok(ranked
            .into_iter()
            .take(limit)
            .filter_map(|ranked| {
                let record = self.table.record(ranked.row)?;
                Some(SimilarPlayer {
                    identity: &record.identity,
                    distance: ranked.distance,
                })
            })
            .collect())
    }

    fn identities(&self) -> impl Iterator<Item = &PlayerIdentity> {
        self.table.records().iter().map(|record| &record.identity)
    }

    fn stat_line(&self, row: usize, column: &str) -> Result<StatLine, ProfileError> {
        let index =
            self.positional
                .column_index(column)
                .ok_or_else(|| ProfileError::UnknownStat {
                    column: column.to_owned(),
                })?;
        let value = self
            .positional
            .raw_row(row)
            .ok_or(ProfileError::UnknownRow { row })?[index];
        let percentile = self
            .positional
            .row(row)
            .ok_or(ProfileError::UnknownRow { row })?
            .values()[index];
        Ok(StatLine {
            column: column.to_owned(),
            value,
            percentile,
        })
    }
}
