//! Typed reader for the e-waste facility register table.

use std::io::Read;

use ewaste_map_source_models::RawFacilityRow;

use crate::parsing::parse_finite;
use crate::source_def::{ColumnMapping, SourceDefinition};
use crate::table::Table;
use crate::SourceError;

/// Reads the facility register table into raw facility rows.
///
/// Coordinates are coerced here (blank or non-finite cells become
/// `None`); dropping coordinate-less rows is the facility normalizer's
/// decision, not the reader's.
///
/// # Errors
///
/// Returns [`SourceError::SourceKind`] if `def` is not a facilities
/// source, and the structural table errors from [`Table`] otherwise.
pub fn read_facility_rows(
    def: &SourceDefinition,
    reader: impl Read,
) -> Result<Vec<RawFacilityRow>, SourceError> {
    let ColumnMapping::Facilities {
        name,
        owner,
        facility_type,
        infrastructure_type,
        address,
        suburb,
        lga,
        latitude,
        longitude,
    } = &def.columns
    else {
        return Err(SourceError::SourceKind {
            id: def.id.clone(),
            expected: "facilities",
        });
    };

    let table = Table::from_reader(&def.label, reader)?;
    table.require_columns(&def.label, &def.columns.expected_columns())?;

    let rows: Vec<RawFacilityRow> = table
        .rows()
        .map(|row| RawFacilityRow {
            name: row.get(name).to_owned(),
            owner: row.get(owner).to_owned(),
            facility_type: row.get(facility_type).to_owned(),
            infrastructure_type: row.get(infrastructure_type).to_owned(),
            address: row.get(address).to_owned(),
            suburb: row.get(suburb).to_owned(),
            lga: row.get(lga).to_owned(),
            latitude: parse_finite(row.get(latitude)),
            longitude: parse_finite(row.get(longitude)),
        })
        .collect();

    log::info!("{}: read {} raw facility rows", def.label, rows.len());

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::find_source;

    const CSV: &str = "\
Facility Name,Facility Owner,Facility Type,Infrastructure Type,Address,Suburb,LGA,Latitude,Longitude
Eco Drop Point,Greenworks,Drop-off,Collection,1 Smith St,Fitzroy,Yarra,-37.7983,144.9786
No Coords Depot,Council,Transfer,Collection,9 Back Rd,Clayton,Monash,,
";

    #[test]
    fn reads_typed_facility_rows() {
        let def = find_source("vic_facilities").unwrap();
        let rows = read_facility_rows(&def, CSV.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Eco Drop Point");
        assert_eq!(rows[0].suburb, "Fitzroy");
        assert_eq!(rows[0].latitude, Some(-37.7983));
    }

    #[test]
    fn blank_coordinates_are_absent() {
        let def = find_source("vic_facilities").unwrap();
        let rows = read_facility_rows(&def, CSV.as_bytes()).unwrap();
        assert_eq!(rows[1].latitude, None);
        assert_eq!(rows[1].longitude, None);
    }

    #[test]
    fn rejects_table_missing_expected_columns() {
        let def = find_source("vic_facilities").unwrap();
        let csv = "Facility Name,Suburb\nEco Drop Point,Fitzroy\n";
        let err = read_facility_rows(&def, csv.as_bytes()).unwrap_err();
        assert!(matches!(err, SourceError::MissingColumns { .. }));
    }
}
