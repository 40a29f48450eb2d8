//! Raw tabular input
//!
//! [`RawTable`] is the untyped form of the season file: named columns and
//! rows of optional text cells. It carries no knowledge of which columns are
//! stats; that happens in [`clean`](crate::clean).
//!
//! # CSV layout
//!
//! ```text
//! Player,Nation,Pos,Squad,Comp,Age,Born,Playing Time Min,Tackles Tkl%,...
//! Jane Doe,ENG,"DF,MF",Example FC,Premier League,24,1999,2310,61.5,...
//! ```
//!
//! Cells are trimmed; an empty cell is a missing value.

use std::{io, path::Path};

use tracing::debug;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("failed to read CSV data")]
    Csv { source: csv::Error },
    #[display("failed to open CSV file {}", path.display())]
    Open {
        path: std::path::PathBuf,
        source: csv::Error,
    },
    #[display("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Column names plus rows of optional text cells.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: vec![],
        }
    }

    /// Appends a row; `None` cells are missing values.
    pub fn push_row<I, S>(&mut self, cells: I) -> Result<(), LoadError>
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let row = cells
            .into_iter()
            .map(|cell| cell.map(Into::into))
            .collect::<Vec<_>>();
        if row.len() != self.columns.len() {
            return Err(LoadError::RowLength {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Reads a headed CSV stream.
    pub fn from_csv_reader<R>(reader: R) -> Result<Self, LoadError>
    where
        R: io::Read,
    {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        Self::from_csv(&mut reader)
    }

    /// Reads a headed CSV file.
    pub fn from_csv_path<P>(path: P) -> Result<Self, LoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|source| LoadError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_csv(&mut reader)
    }

    fn from_csv<R>(reader: &mut csv::Reader<R>) -> Result<Self, LoadError>
    where
        R: io::Read,
    {
        let headers = reader
            .headers()
            .map_err(|source| LoadError::Csv { source })?
            .clone();
        let mut table = Self::new(headers.iter());
        for record in reader.records() {
            let record = record.map_err(|source| LoadError::Csv { source })?;
            table.push_row(
                record
                    .iter()
                    .map(|cell| (!cell.is_empty()).then_some(cell)),
            )?;
        }
        debug!(
            columns = table.columns.len(),
            rows = table.rows.len(),
            "loaded raw table"
        );
        Ok(table)
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text, or `None` if the row is out of range or the cell is missing.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column)?.as_deref()
    }
}
