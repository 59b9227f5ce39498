#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! E-waste facility directory normalization.
//!
//! The sibling artifact to the risk dataset: a pass-through cleanup of
//! the facility register with no scoring. It shares the pipeline's
//! skip-invalid-rows-silently policy — a row without both coordinates
//! is dropped, everything else is kept with trimmed fields.

use ewaste_map_source_models::RawFacilityRow;
use serde::{Deserialize, Serialize};

/// One disposal facility in the published directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    /// Synthesized identifier: `"{name}-{lat}-{lon}"` from the trimmed
    /// source name (which may be empty).
    pub id: String,
    /// Display name, `"Unknown facility"` when the source left it blank.
    pub name: String,
    /// Operating organisation.
    pub owner: String,
    /// Facility type.
    pub facility_type: String,
    /// Infrastructure type classification.
    pub infrastructure_type: String,
    /// Street address.
    pub address: String,
    /// Suburb, uppercased for exact-match filtering.
    pub suburb: String,
    /// Local government area.
    pub lga: String,
    /// Latitude (WGS84).
    pub lat: f64,
    /// Longitude (WGS84).
    pub lon: f64,
}

/// The published facility directory artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityDirectory {
    /// ISO 8601 generation timestamp.
    pub generated_at: String,
    /// All facilities that survived normalization.
    pub facilities: Vec<Facility>,
}

/// Normalizes raw register rows into the directory's facilities.
///
/// Rows lacking a finite latitude or longitude are skipped silently,
/// matching the pipeline's row-level policy.
#[must_use]
pub fn normalize_facilities(rows: &[RawFacilityRow]) -> Vec<Facility> {
    rows.iter()
        .filter_map(|row| {
            let (lat, lon) = (row.latitude?, row.longitude?);
            let name = row.name.trim();
            Some(Facility {
                id: format!("{name}-{lat}-{lon}"),
                name: if name.is_empty() {
                    "Unknown facility".to_owned()
                } else {
                    name.to_owned()
                },
                owner: row.owner.trim().to_owned(),
                facility_type: row.facility_type.trim().to_owned(),
                infrastructure_type: row.infrastructure_type.trim().to_owned(),
                address: row.address.trim().to_owned(),
                suburb: row.suburb.trim().to_uppercase(),
                lga: row.lga.trim().to_owned(),
                lat,
                lon,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, suburb: &str, lat: Option<f64>, lon: Option<f64>) -> RawFacilityRow {
        RawFacilityRow {
            name: name.to_owned(),
            owner: "Greenworks".to_owned(),
            facility_type: "Drop-off".to_owned(),
            infrastructure_type: "Collection".to_owned(),
            address: "1 Smith St".to_owned(),
            suburb: suburb.to_owned(),
            lga: "Yarra".to_owned(),
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn normalizes_a_complete_row() {
        let facilities =
            normalize_facilities(&[raw("Eco Drop Point", "Fitzroy", Some(-37.8), Some(144.98))]);
        assert_eq!(facilities.len(), 1);
        let f = &facilities[0];
        assert_eq!(f.id, "Eco Drop Point--37.8-144.98");
        assert_eq!(f.suburb, "FITZROY");
        assert_eq!(f.lga, "Yarra");
    }

    #[test]
    fn drops_rows_without_both_coordinates() {
        let facilities = normalize_facilities(&[
            raw("A", "Fitzroy", None, Some(144.98)),
            raw("B", "Fitzroy", Some(-37.8), None),
            raw("C", "Fitzroy", None, None),
            raw("D", "Fitzroy", Some(-37.8), Some(144.98)),
        ]);
        assert_eq!(facilities.len(), 1);
        assert_eq!(facilities[0].name, "D");
    }

    #[test]
    fn blank_name_falls_back_but_keeps_its_id_shape() {
        let facilities = normalize_facilities(&[raw("   ", "Fitzroy", Some(-37.8), Some(144.98))]);
        assert_eq!(facilities[0].name, "Unknown facility");
        assert_eq!(facilities[0].id, "--37.8-144.98");
    }

    #[test]
    fn directory_serializes_with_camel_case_keys() {
        let directory = FacilityDirectory {
            generated_at: "2025-06-01T00:00:00.000Z".to_owned(),
            facilities: normalize_facilities(&[raw(
                "Eco Drop Point",
                "Fitzroy",
                Some(-37.8),
                Some(144.98),
            )]),
        };
        let value = serde_json::to_value(&directory).unwrap();
        assert!(value["generatedAt"].is_string());
        let f = &value["facilities"][0];
        assert!(f["facilityType"].is_string());
        assert!(f["infrastructureType"].is_string());
        assert!(f["lat"].is_number());
    }
}
