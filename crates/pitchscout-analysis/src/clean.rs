//! Loading-time filtering and filling
//!
//! [`clean`] turns a [`RawTable`] into a [`CleanedTable`]:
//!
//! 1. rows at or below the playing-time threshold are dropped
//! 2. goalkeepers are dropped
//! 3. the survivors are reindexed contiguously, keeping input order
//! 4. missing numeric cells become `0.0`
//! 5. position labels are folded into buckets (see [`position`](crate::position))
//!
//! The cleaned table is never mutated afterwards.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    catalog::{self, identity},
    dataset::RawTable,
    position::{self, Canonical, Position, UnknownPositionError},
};

/// Default minimum playing time, in minutes. Rows need strictly more.
pub const DEFAULT_MIN_MINUTES: f64 = 360.0;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CleanError {
    #[display("required column '{column}' is missing")]
    Schema { column: String },
    #[display("no rows left after filtering {input_rows} input rows")]
    EmptyResult { input_rows: usize },
    #[display("row {row}: column '{column}' has non-numeric value '{value}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
    #[display("row {row}: {source}")]
    UnknownPosition {
        row: usize,
        source: UnknownPositionError,
    },
}

/// Cleaner settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Rows need strictly more playing time than this.
    pub min_minutes: f64,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            min_minutes: DEFAULT_MIN_MINUTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerIdentity {
    pub name: String,
    pub nation: String,
    /// Position label as it appeared in the input.
    pub position_label: String,
    pub position: Position,
    pub club: String,
    pub competition: String,
    pub age: Option<u32>,
    pub born: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub identity: PlayerIdentity,
    pub minutes: f64,
    /// One value per [`CleanedTable::stat_columns`] entry.
    stats: Vec<f64>,
}

impl PlayerRecord {
    #[must_use]
    pub fn stats(&self) -> &[f64] {
        &self.stats
    }
}

/// Filtered, zero-filled player table.
#[derive(Debug, Clone)]
pub struct CleanedTable {
    stat_columns: Vec<String>,
    records: Vec<PlayerRecord>,
}

impl CleanedTable {
    #[must_use]
    pub fn stat_columns(&self) -> &[String] {
        &self.stat_columns
    }

    #[must_use]
    pub fn stat_index(&self, column: &str) -> Option<usize> {
        self.stat_columns.iter().position(|c| c == column)
    }

    #[must_use]
    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    #[must_use]
    pub fn record(&self, row: usize) -> Option<&PlayerRecord> {
        self.records.get(row)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Filters and fills a raw table using every stat column of the catalog.
pub fn clean(raw: &RawTable, config: &CleanConfig) -> Result<CleanedTable, CleanError> {
    clean_with_columns(raw, config, &catalog::required_stat_columns())
}

/// Filters and fills a raw table, keeping the given stat columns.
pub fn clean_with_columns(
    raw: &RawTable,
    config: &CleanConfig,
    stat_columns: &[&str],
) -> Result<CleanedTable, CleanError> {
    let column = |name: &str| {
        raw.column_index(name).ok_or_else(|| CleanError::Schema {
            column: name.to_owned(),
        })
    };
    let identity_columns = IdentityColumns {
        name: column(identity::PLAYER)?,
        nation: column(identity::NATION)?,
        position: column(identity::POSITION)?,
        club: column(identity::CLUB)?,
        competition: column(identity::COMPETITION)?,
        age: column(identity::AGE)?,
        born: column(identity::BORN)?,
        minutes: column(identity::MINUTES)?,
    };
    let stat_indices = stat_columns
        .iter()
        .map(|&name| column(name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut records = vec![];
    let mut dropped_minutes = 0usize;
    let mut dropped_goalkeepers = 0usize;

    for row in 0..raw.len() {
        let minutes = numeric_cell(raw, row, identity_columns.minutes)?;
        if minutes <= config.min_minutes {
            dropped_minutes += 1;
            continue;
        }

        let position_label = text_cell(raw, row, identity_columns.position);
        let position = match position::canonicalize(&position_label)
            .map_err(|source| CleanError::UnknownPosition { row, source })?
        {
            Canonical::Goalkeeper => {
                dropped_goalkeepers += 1;
                continue;
            }
            Canonical::Outfield(position) => position,
        };

        let stats = stat_indices
            .iter()
            .map(|&column| numeric_cell(raw, row, column))
            .collect::<Result<Vec<_>, _>>()?;

        records.push(PlayerRecord {
            identity: PlayerIdentity {
                name: text_cell(raw, row, identity_columns.name),
                nation: text_cell(raw, row, identity_columns.nation),
                position_label,
                position,
                club: text_cell(raw, row, identity_columns.club),
                competition: text_cell(raw, row, identity_columns.competition),
                age: leading_integer(raw.cell(row, identity_columns.age)),
                born: leading_integer(raw.cell(row, identity_columns.born)),
            },
            minutes,
            stats,
        });
    }

    debug!(dropped_minutes, dropped_goalkeepers, "filtered player rows");
    if records.is_empty() {
        return Err(CleanError::EmptyResult {
            input_rows: raw.len(),
        });
    }
    info!(
        input_rows = raw.len(),
        kept = records.len(),
        "cleaned player table"
    );

    Ok(CleanedTable {
        stat_columns: stat_columns.iter().map(|c| (*c).to_owned()).collect(),
        records,
    })
}

#[derive(Debug, Clone, Copy)]
struct IdentityColumns {
    name: usize,
    nation: usize,
    position: usize,
    club: usize,
    competition: usize,
    age: usize,
    born: usize,
    minutes: usize,
}

fn text_cell(raw: &RawTable, row: usize, column: usize) -> String {
    raw.cell(row, column).unwrap_or_default().to_owned()
}

/// Missing cells and `NaN`/`NA` markers read as `0.0`.
fn numeric_cell(raw: &RawTable, row: usize, column: usize) -> Result<f64, CleanError> {
    let Some(text) = raw.cell(row, column) else {
        return Ok(0.0);
    };
    if is_missing_marker(text) {
        return Ok(0.0);
    }
    text.replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CleanError::InvalidNumber {
            row,
            column: raw.columns()[column].clone(),
            value: text.to_owned(),
        })
}

fn is_missing_marker(text: &str) -> bool {
    text.is_empty()
        || ["nan", "na", "n/a", "null"]
            .iter()
            .any(|marker| text.eq_ignore_ascii_case(marker))
}

/// `"25-123"` -> 25, `"1999"` -> 1999, `"abc"` -> None.
fn leading_integer(cell: Option<&str>) -> Option<u32> {
    let text = cell?;
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds a raw table with the identity columns plus the given stat
    /// columns. Each player is `(name, position, club, minutes, stats)`.
    pub(crate) fn raw_table(
        stat_columns: &[&str],
        players: &[(&str, &str, &str, f64, &[f64])],
    ) -> RawTable {
        let mut table = RawTable::new(identity::ALL.iter().chain(stat_columns).copied());
        for (name, position, club, minutes, stats) in players {
            let mut cells = vec![
                Some((*name).to_owned()),
                Some("ENG".to_owned()),
                Some((*position).to_owned()),
                Some((*club).to_owned()),
                Some("eng Premier League".to_owned()),
                Some("25-100".to_owned()),
                Some("1998".to_owned()),
                Some(minutes.to_string()),
            ];
            cells.extend(stats.iter().map(|v| Some(v.to_string())));
            table.push_row(cells).unwrap();
        }
        table
    }

    #[test]
    fn test_drops_goalkeepers_and_low_minutes() {
        let raw = raw_table(
            &["Int"],
            &[
                ("Keeper", "GK", "A", 3000.0, &[0.0]),
                ("Sub", "MF", "A", 300.0, &[4.0]),
                ("Starter", "DF", "A", 2700.0, &[40.0]),
            ],
        );
        let cleaned = clean_with_columns(&raw, &CleanConfig::default(), &["Int"]).unwrap();

        assert_eq!(cleaned.len(), 1);
        let record = &cleaned.records()[0];
        assert_eq!(record.identity.name, "Starter");
        assert_eq!(record.identity.position, Position::Defender);
        assert_eq!(record.identity.age, Some(25));
        assert_eq!(record.identity.born, Some(1998));
        assert_eq!(record.stats(), &[40.0]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let raw = raw_table(
            &["Int"],
            &[
                ("Exactly", "MF", "A", 360.0, &[1.0]),
                ("Above", "MF", "A", 361.0, &[1.0]),
            ],
        );
        let cleaned = clean_with_columns(&raw, &CleanConfig::default(), &["Int"]).unwrap();
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned.records()[0].identity.name, "Above");

        let relaxed = CleanConfig { min_minutes: 0.0 };
        assert_eq!(
            clean_with_columns(&raw, &relaxed, &["Int"]).unwrap().len(),
            2
        );
    }

    #[test]
    fn test_every_cleaned_row_satisfies_filters() {
        let raw = raw_table(
            &["Int"],
            &[
                ("a", "GK", "A", 900.0, &[1.0]),
                ("b", "DF,MF", "A", 1200.0, &[2.0]),
                ("c", "FW", "B", 90.0, &[3.0]),
                ("d", "MF,FW", "B", 2000.0, &[4.0]),
                ("e", "GK", "B", 100.0, &[5.0]),
            ],
        );
        let cleaned = clean_with_columns(&raw, &CleanConfig::default(), &["Int"]).unwrap();
        assert_eq!(cleaned.len(), 2);
        for record in cleaned.records() {
            assert!(record.minutes > DEFAULT_MIN_MINUTES);
            assert_ne!(record.identity.position_label, "GK");
        }
        let positions = cleaned
            .records()
            .iter()
            .map(|r| r.identity.position)
            .collect::<Vec<_>>();
        assert_eq!(positions, [Position::DefensiveMid, Position::AttackingMid]);
    }

    #[test]
    fn test_missing_numeric_cells_become_zero() {
        let mut raw = RawTable::new(identity::ALL.iter().chain(&["Int", "KP"]).copied());
        raw.push_row([
            Some("Jo"),
            None,
            Some("FW"),
            Some("C"),
            Some("L"),
            None,
            None,
            Some("1,200"),
            None,
            Some("NaN"),
        ])
        .unwrap();
        let cleaned = clean_with_columns(&raw, &CleanConfig::default(), &["Int", "KP"]).unwrap();
        let record = &cleaned.records()[0];
        assert_eq!(record.minutes, 1200.0);
        assert_eq!(record.stats(), &[0.0, 0.0]);
        assert_eq!(record.identity.nation, "");
        assert_eq!(record.identity.age, None);
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let raw = raw_table(&["Int"], &[("a", "DF", "A", 900.0, &[1.0])]);
        let err = clean_with_columns(&raw, &CleanConfig::default(), &["Int", "KP"]).unwrap_err();
        assert!(matches!(err, CleanError::Schema { ref column } if column == "KP"));

        let err = clean(&raw, &CleanConfig::default()).unwrap_err();
        assert!(matches!(err, CleanError::Schema { .. }));
    }

    #[test]
    fn test_everything_filtered_is_empty_result() {
        let raw = raw_table(
            &["Int"],
            &[
                ("a", "GK", "A", 900.0, &[1.0]),
                ("b", "DF", "A", 10.0, &[1.0]),
            ],
        );
        let err = clean_with_columns(&raw, &CleanConfig::default(), &["Int"]).unwrap_err();
        assert!(matches!(err, CleanError::EmptyResult { input_rows: 2 }));
    }

    #[test]
    fn test_bad_cells_are_reported() {
        let raw = raw_table(&["Int"], &[("a", "DF", "A", 900.0, &[1.0])]);
        let mut bad = RawTable::new(raw.columns().iter().map(String::as_str));
        bad.push_row([
            Some("a"),
            Some("ENG"),
            Some("DF"),
            Some("A"),
            Some("L"),
            Some("20"),
            Some("2004"),
            Some("900"),
            Some("lots"),
        ])
        .unwrap();
        let err = clean_with_columns(&bad, &CleanConfig::default(), &["Int"]).unwrap_err();
        assert!(matches!(
            err,
            CleanError::InvalidNumber { row: 0, ref column, ref value } if column == "Int" && value == "lots"
        ));

        let odd = raw_table(&["Int"], &[("a", "Sweeper", "A", 900.0, &[1.0])]);
        let err = clean_with_columns(&odd, &CleanConfig::default(), &["Int"]).unwrap_err();
        assert!(matches!(err, CleanError::UnknownPosition { row: 0, .. }));
    }
}
