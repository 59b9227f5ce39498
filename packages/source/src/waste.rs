//! Typed reader for the waste statistics table.

use std::io::Read;

use ewaste_map_source_models::RawObservation;

use crate::parsing::{parse_finite, parse_population};
use crate::source_def::{ColumnMapping, SourceDefinition};
use crate::table::Table;
use crate::SourceError;

/// Reads the waste statistics table into raw observations.
///
/// Every data row becomes one [`RawObservation`] — including rows with a
/// blank council or year, which the normalizer drops later. Only the
/// table's structure is validated here.
///
/// # Errors
///
/// Returns [`SourceError::SourceKind`] if `def` is not a waste source,
/// and the structural table errors from [`Table`] otherwise.
pub fn read_observations(
    def: &SourceDefinition,
    reader: impl Read,
) -> Result<Vec<RawObservation>, SourceError> {
    let ColumnMapping::Waste {
        council,
        financial_year,
        population,
        collected_tonnes,
        recycled_tonnes,
    } = &def.columns
    else {
        return Err(SourceError::SourceKind {
            id: def.id.clone(),
            expected: "waste",
        });
    };

    let table = Table::from_reader(&def.label, reader)?;
    table.require_columns(&def.label, &def.columns.expected_columns())?;

    let observations: Vec<RawObservation> = table
        .rows()
        .map(|row| RawObservation {
            council: row.get(council).to_owned(),
            financial_year: row.get(financial_year).to_owned(),
            population: parse_population(row.get(population)),
            collected_tonnes: parse_finite(row.get(collected_tonnes)),
            recycled_tonnes: parse_finite(row.get(recycled_tonnes)),
        })
        .collect();

    log::info!(
        "{}: read {} raw observations",
        def.label,
        observations.len()
    );

    Ok(observations)
}
