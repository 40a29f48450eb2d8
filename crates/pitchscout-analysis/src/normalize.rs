//! Percentile normalization
//!
//! [`normalize`] projects a [`CleanedTable`] onto a set of stat columns and
//! maps every cell to a percentile in `[0, 100]`:
//!
//! ```text
//! z          = (value - group mean) / group std dev
//! percentile = Φ(z) × 100
//! ```
//!
//! The reference group depends on the [`GroupingPolicy`]. A column without
//! spread inside a group has `z = 0` for every member, so every member sits at
//! exactly the 50th percentile.
//!
//! Group statistics are computed from sorted values, which makes the output
//! independent of row order within a group.

use std::collections::BTreeMap;

use pitchscout_stats::{
    descriptive::{DescriptiveStats, Dispersion},
    normal::z_to_percentile,
};
use serde::Serialize;
use tracing::debug;

use crate::{clean::CleanedTable, position::Position};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum NormalizeError {
    #[display("projection column '{column}' is not in the cleaned table")]
    UnknownColumn { column: String },
}

/// Reference population used to standardize a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GroupingPolicy {
    /// One population: the whole cleaned table.
    Global,
    /// One population per position bucket.
    ByPosition,
}

impl GroupingPolicy {
    /// The global view divides by `n`, the positional view by `n - 1`.
    #[must_use]
    pub fn dispersion(self) -> Dispersion {
        match self {
            Self::Global => Dispersion::Population,
            Self::ByPosition => Dispersion::Sample,
        }
    }
}

/// Percentiles of a column projection, row-aligned with the cleaned table.
#[derive(Debug, Clone)]
pub struct PercentileTable {
    policy: GroupingPolicy,
    columns: Vec<String>,
    raw: Vec<Vec<f64>>,
    percentiles: Vec<Vec<f64>>,
}

/// One player's percentiles, addressable by column name.
#[derive(Debug, Clone, Copy)]
pub struct PercentileRow<'a> {
    columns: &'a [String],
    values: &'a [f64],
}

impl<'a> PercentileRow<'a> {
    /// Builds a row view from parallel column and value slices.
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length.
    #[must_use]
    pub fn new(columns: &'a [String], values: &'a [f64]) -> Self {
        assert_eq!(columns.len(), values.len(), "columns and values differ in length");
        Self { columns, values }
    }

    /// Percentile of the first column with this name.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<f64> {
        let index = self.columns.iter().position(|c| c == column)?;
        Some(self.values[index])
    }

    #[must_use]
    pub fn values(&self) -> &'a [f64] {
        self.values
    }

    #[must_use]
    pub fn columns(&self) -> &'a [String] {
        self.columns
    }
}

impl PercentileTable {
    #[must_use]
    pub fn policy(&self) -> GroupingPolicy {
        self.policy
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.percentiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.percentiles.is_empty()
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<PercentileRow<'_>> {
        let values = self.percentiles.get(row)?;
        Some(PercentileRow::new(&self.columns, values))
    }

    /// Un-normalized values of the projection for one row.
    #[must_use]
    pub fn raw_row(&self, row: usize) -> Option<&[f64]> {
        self.raw.get(row).map(Vec::as_slice)
    }

    /// Every row's percentiles, in cleaned-table order.
    #[must_use]
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.percentiles
    }
}

/// Maps a projection of the cleaned table into percentile space.
pub fn normalize<S>(
    table: &CleanedTable,
    projection: &[S],
    policy: GroupingPolicy,
) -> Result<PercentileTable, NormalizeError>
where
    S: AsRef<str>,
{
    let indices = projection
        .iter()
        .map(|column| {
            let column = column.as_ref();
            table
                .stat_index(column)
                .ok_or_else(|| NormalizeError::UnknownColumn {
                    column: column.to_owned(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let raw = table
        .records()
        .iter()
        .map(|record| indices.iter().map(|&i| record.stats()[i]).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let groups: Vec<Vec<usize>> = match policy {
        GroupingPolicy::Global => vec![(0..table.len()).collect()],
        GroupingPolicy::ByPosition => {
            let mut by_position = BTreeMap::<Position, Vec<usize>>::new();
            for (row, record) in table.records().iter().enumerate() {
                by_position
                    .entry(record.identity.position)
                    .or_default()
                    .push(row);
            }
            by_position.into_values().collect()
        }
    };

    let dispersion = policy.dispersion();
    let mut percentiles = vec![vec![0.0; indices.len()]; raw.len()];
    for members in &groups {
        for column in 0..indices.len() {
            let Some(stats) = DescriptiveStats::new(members.iter().map(|&row| raw[row][column]))
            else {
                continue;
            };
            for &row in members {
                let z = stats.z_score(raw[row][column], dispersion);
                percentiles[row][column] = z_to_percentile(z);
            }
        }
    }

    debug!(
        ?policy,
        columns = indices.len(),
        rows = raw.len(),
        groups = groups.len(),
        "normalized projection"
    );

    Ok(PercentileTable {
        policy,
        columns: projection.iter().map(|c| c.as_ref().to_owned()).collect(),
        raw,
        percentiles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::{CleanConfig, clean_with_columns, tests::raw_table};

    const COLUMNS: &[&str] = &["Int", "KP", "Flat"];

    fn cleaned(players: &[(&str, &str, &str, f64, &[f64])]) -> CleanedTable {
        clean_with_columns(
            &raw_table(COLUMNS, players),
            &CleanConfig::default(),
            COLUMNS,
        )
        .unwrap()
    }

    fn sample() -> CleanedTable {
        cleaned(&[
            ("d1", "DF", "A", 900.0, &[1.0, 10.0, 5.0]),
            ("d2", "DF", "A", 900.0, &[2.0, 20.0, 5.0]),
            ("d3", "DF", "B", 900.0, &[3.0, 30.0, 5.0]),
            ("f1", "FW", "B", 900.0, &[10.0, 1.0, 5.0]),
            ("f2", "FW", "C", 900.0, &[20.0, 2.0, 5.0]),
            ("f3", "FW", "C", 900.0, &[30.0, 3.0, 5.0]),
        ])
    }

    fn column(table: &PercentileTable, name: &str) -> Vec<f64> {
        let index = table.column_index(name).unwrap();
        table.matrix().iter().map(|row| row[index]).collect()
    }

    #[test]
    fn test_zero_variance_column_is_exactly_fifty() {
        let table = sample();
        for policy in [GroupingPolicy::Global, GroupingPolicy::ByPosition] {
            let view = normalize(&table, COLUMNS, policy).unwrap();
            assert!(column(&view, "Flat").iter().all(|&p| p == 50.0));
        }
    }

    #[test]
    fn test_equal_inexact_decimals_are_exactly_fifty() {
        for v in [0.1, 0.7, 12.3] {
            let table = cleaned(&[
                ("d1", "DF", "A", 900.0, &[v, v, v]),
                ("d2", "DF", "A", 900.0, &[v, v, v]),
                ("d3", "DF", "B", 900.0, &[v, v, v]),
            ]);
            for policy in [GroupingPolicy::Global, GroupingPolicy::ByPosition] {
                let view = normalize(&table, COLUMNS, policy).unwrap();
                assert_eq!(view.policy(), policy);
                for row in view.matrix() {
                    assert_eq!(row, &[50.0, 50.0, 50.0], "v={v} {policy:?}");
                }
            }
        }
    }

    #[test]
    fn test_global_percentiles_center_on_fifty_and_follow_raw_order() {
        let table = sample();
        let view = normalize(&table, COLUMNS, GroupingPolicy::Global).unwrap();
        let kp = column(&view, "KP");

        let mean = kp.iter().sum::<f64>() / 6.0;
        assert!(mean > 35.0 && mean < 65.0);

        let raw_kp = table
            .records()
            .iter()
            .map(|r| r.stats()[1])
            .collect::<Vec<_>>();
        for i in 0..raw_kp.len() {
            for j in 0..raw_kp.len() {
                if raw_kp[i] < raw_kp[j] {
                    assert!(kp[i] < kp[j]);
                }
            }
        }
    }

    #[test]
    fn test_symmetric_group_has_mean_fifty() {
        let table = sample();
        let view = normalize(&table, COLUMNS, GroupingPolicy::ByPosition).unwrap();
        let int = column(&view, "Int");

        let defenders = (int[0] + int[1] + int[2]) / 3.0;
        let forwards = (int[3] + int[4] + int[5]) / 3.0;
        assert!((defenders - 50.0).abs() < 1e-9);
        assert!((forwards - 50.0).abs() < 1e-9);
        assert!(int[0] < int[1] && int[1] < int[2]);
    }

    #[test]
    fn test_positional_policy_compares_within_group_only() {
        let table = sample();
        let view = normalize(&table, COLUMNS, GroupingPolicy::ByPosition).unwrap();
        let int = column(&view, "Int");

        // 3 is the best defender, 30 the best forward: same rank in each group.
        assert!((int[2] - int[5]).abs() < 1e-9);
        assert!((int[0] - int[3]).abs() < 1e-9);

        // Sample std of {1, 2, 3} is 1, so the top defender is at z = 1.
        assert!((int[2] - 84.134_474_6).abs() < 1e-4);

        let global = normalize(&table, COLUMNS, GroupingPolicy::Global).unwrap();
        assert!(column(&global, "Int")[2] < 50.0);
    }

    #[test]
    fn test_single_member_group_is_fifty() {
        let table = cleaned(&[
            ("d1", "DF", "A", 900.0, &[1.0, 4.0, 0.0]),
            ("m1", "MF", "A", 900.0, &[7.0, 9.0, 0.0]),
            ("d2", "DF", "A", 900.0, &[3.0, 8.0, 0.0]),
        ]);
        let view = normalize(&table, COLUMNS, GroupingPolicy::ByPosition).unwrap();
        assert_eq!(view.row(1).unwrap().values(), &[50.0, 50.0, 50.0]);
    }

    #[test]
    fn test_row_order_does_not_change_percentiles() {
        let forward = sample();
        let reversed = cleaned(&[
            ("f3", "FW", "C", 900.0, &[30.0, 3.0, 5.0]),
            ("f2", "FW", "C", 900.0, &[20.0, 2.0, 5.0]),
            ("f1", "FW", "B", 900.0, &[10.0, 1.0, 5.0]),
            ("d3", "DF", "B", 900.0, &[3.0, 30.0, 5.0]),
            ("d2", "DF", "A", 900.0, &[2.0, 20.0, 5.0]),
            ("d1", "DF", "A", 900.0, &[1.0, 10.0, 5.0]),
        ]);
        for policy in [GroupingPolicy::Global, GroupingPolicy::ByPosition] {
            let a = normalize(&forward, COLUMNS, policy).unwrap();
            let b = normalize(&reversed, COLUMNS, policy).unwrap();
            for (i, record) in forward.records().iter().enumerate() {
                let j = reversed
                    .records()
                    .iter()
                    .position(|r| r.identity.name == record.identity.name)
                    .unwrap();
                assert_eq!(a.row(i).unwrap().values(), b.row(j).unwrap().values());
            }
        }
    }

    #[test]
    fn test_projection_keeps_raw_values_and_rejects_unknown_columns() {
        let table = sample();
        let view = normalize(&table, &["KP", "Int"], GroupingPolicy::Global).unwrap();
        assert_eq!(view.columns(), ["KP", "Int"]);
        assert_eq!(view.raw_row(3), Some(&[1.0, 10.0][..]));
        assert_eq!(view.len(), table.len());

        let err = normalize(&table, &["xG"], GroupingPolicy::Global).unwrap_err();
        assert!(matches!(err, NormalizeError::UnknownColumn { ref column } if column == "xG"));
    }
}
