#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Raw input row types produced by the ingestion boundary.
//!
//! These are the typed equivalents of one spreadsheet/CSV row, after
//! header-addressed cell lookup and numeric coercion but before any
//! domain computation. Cells that were blank or failed to parse as a
//! finite number arrive here as `None` — never as zero.

use serde::{Deserialize, Serialize};

/// One raw waste-statistics row: a council's figures for one financial
/// year.
///
/// The source table enforces no uniqueness, so duplicate (council, year)
/// pairs can and do occur; deduplication is the normalizer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    /// Council name as published, trimmed.
    pub council: String,
    /// Financial-year label as published (e.g. `"2020-2021"`), trimmed.
    pub financial_year: String,
    /// Resident population, when the cell held a whole number.
    pub population: Option<u64>,
    /// Kerbside recycling collected tonnage.
    pub collected_tonnes: Option<f64>,
    /// Kerbside recycling recycled tonnage.
    pub recycled_tonnes: Option<f64>,
}

/// One raw facility-register row.
///
/// Text fields are trimmed; coordinates are `None` when the cell was
/// blank or not a finite number. Rows without both coordinates are
/// dropped by the facility normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFacilityRow {
    /// Facility display name.
    pub name: String,
    /// Operating organisation.
    pub owner: String,
    /// Facility type (e.g. drop-off point, transfer station).
    pub facility_type: String,
    /// Infrastructure type classification.
    pub infrastructure_type: String,
    /// Street address.
    pub address: String,
    /// Suburb, as published (uppercasing happens in normalization).
    pub suburb: String,
    /// Local government area the facility sits in.
    pub lga: String,
    /// Latitude (WGS84), when finite.
    pub latitude: Option<f64>,
    /// Longitude (WGS84), when finite.
    pub longitude: Option<f64>,
}
