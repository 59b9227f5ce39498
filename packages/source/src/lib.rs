#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Ingestion boundary for raw government data exports.
//!
//! Reads header-addressed CSV tables, validates their structure against
//! the embedded source definitions, and coerces cells into the typed raw
//! row formats. Only structural problems (a missing table, missing
//! expected columns) are errors; row-level deficiencies degrade fields to
//! `None` and never fail a run.

pub mod facilities;
pub mod parsing;
pub mod registry;
pub mod source_def;
pub mod table;
pub mod waste;

/// Errors that can occur while reading a raw source table.
///
/// Everything here is a structural, pipeline-halting failure. Malformed
/// individual rows are not represented — they degrade to `None` fields
/// inside the row types instead.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// I/O error (file read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed at the reader level.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The input had no header row at all.
    #[error("{label}: table is empty (no header row)")]
    EmptyTable {
        /// Human-readable label of the source being read.
        label: String,
    },

    /// The table exists but lacks columns the source definition requires.
    #[error("{label}: missing expected columns {expected:?}; found {found:?}")]
    MissingColumns {
        /// Human-readable label of the source being read.
        label: String,
        /// Columns the definition requires but the table lacks.
        expected: Vec<String>,
        /// Columns the table actually has.
        found: Vec<String>,
    },

    /// A reader was handed a source definition of the wrong kind (e.g.
    /// the facility reader given the waste table definition).
    #[error("source '{id}' is not a {expected} source")]
    SourceKind {
        /// The offending source definition's ID.
        id: String,
        /// The kind of source the reader expected.
        expected: &'static str,
    },
}
