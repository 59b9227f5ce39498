//! Header-addressed CSV table reader.
//!
//! Cells are addressed by column name rather than position, headers and
//! values are trimmed, and short rows are tolerated (missing trailing
//! cells read as blank). Structural validation — the table being present
//! at all and carrying the expected columns — happens here, before any
//! row is handed to a typed reader.

use std::io::Read;

use crate::SourceError;

/// An in-memory CSV table with trimmed headers and cells.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Reads a table from CSV input.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EmptyTable`] if the input has no header row,
    /// or [`SourceError::Csv`] if the CSV itself is malformed.
    pub fn from_reader(label: &str, reader: impl Read) -> Result<Self, SourceError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_owned())
            .collect();

        if headers.is_empty() || headers.iter().all(String::is_empty) {
            return Err(SourceError::EmptyTable {
                label: label.to_owned(),
            });
        }

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            rows.push(record.iter().map(|cell| cell.trim().to_owned()).collect());
        }

        log::debug!("{label}: read {} rows, {} columns", rows.len(), headers.len());

        Ok(Self { headers, rows })
    }

    /// Verifies that every expected column is present.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::MissingColumns`] listing the expected and
    /// found column sets when any column is absent.
    pub fn require_columns(&self, label: &str, expected: &[&str]) -> Result<(), SourceError> {
        let missing: Vec<String> = expected
            .iter()
            .filter(|col| !self.headers.iter().any(|h| h == *col))
            .map(|col| (*col).to_owned())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(SourceError::MissingColumns {
                label: label.to_owned(),
                expected: missing,
                found: self.headers.clone(),
            })
        }
    }

    /// Number of data rows in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the data rows.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|cells| Row {
            headers: &self.headers,
            cells,
        })
    }
}

/// A single table row, addressed by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a [String],
    cells: &'a [String],
}

impl Row<'_> {
    /// Returns the trimmed cell under `column`, or an empty string when
    /// the row is short or the column does not exist. Absent cells are
    /// valid input and indistinguishable from blank ones.
    #[must_use]
    pub fn get(&self, column: &str) -> &str {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|idx| self.cells.get(idx))
            .map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "council,financial_year,Population\n Yarra ,2020-2021,100000\nMonash,2019-2020,\n";

    #[test]
    fn reads_trimmed_cells_by_column_name() {
        let table = Table::from_reader("test", CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        let first = table.rows().next().unwrap();
        assert_eq!(first.get("council"), "Yarra");
        assert_eq!(first.get("Population"), "100000");
    }

    #[test]
    fn blank_and_missing_cells_read_as_empty() {
        let table = Table::from_reader("test", CSV.as_bytes()).unwrap();
        let second = table.rows().nth(1).unwrap();
        assert_eq!(second.get("Population"), "");
        assert_eq!(second.get("no_such_column"), "");
    }

    #[test]
    fn tolerates_short_rows() {
        let csv = "a,b,c\n1,2\n";
        let table = Table::from_reader("test", csv.as_bytes()).unwrap();
        let row = table.rows().next().unwrap();
        assert_eq!(row.get("b"), "2");
        assert_eq!(row.get("c"), "");
    }

    #[test]
    fn empty_input_is_a_structural_error() {
        let err = Table::from_reader("waste", "".as_bytes()).unwrap_err();
        assert!(matches!(err, SourceError::EmptyTable { label } if label == "waste"));
    }

    #[test]
    fn missing_columns_lists_expected_and_found() {
        let table = Table::from_reader("waste", CSV.as_bytes()).unwrap();
        let err = table
            .require_columns("waste", &["council", "recycled_tonnes"])
            .unwrap_err();
        match err {
            SourceError::MissingColumns {
                expected, found, ..
            } => {
                assert_eq!(expected, vec!["recycled_tonnes".to_owned()]);
                assert!(found.contains(&"council".to_owned()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn require_columns_passes_when_all_present() {
        let table = Table::from_reader("waste", CSV.as_bytes()).unwrap();
        table
            .require_columns("waste", &["council", "financial_year", "Population"])
            .unwrap();
    }
}
