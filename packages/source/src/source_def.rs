//! Config-driven source definition.
//!
//! [`SourceDefinition`] captures everything unique about one raw data
//! export — its label, its conventional input filename, and the exact
//! column headers its table must carry — in a serializable config struct
//! loaded from TOML at compile time. The typed readers stay generic over
//! the mapping instead of hard-coding column names.

use serde::Deserialize;

/// A complete, config-driven raw source definition.
///
/// Loaded from TOML files embedded in the binary. The `label` is what
/// operators see in diagnostics and what the published envelope records
/// as its `sourceSheet`.
#[derive(Debug, Deserialize)]
pub struct SourceDefinition {
    /// Unique identifier (e.g. `"vic_lga_waste"`).
    pub id: String,
    /// Human-readable label for diagnostics and the published envelope.
    pub label: String,
    /// Conventional filename of the raw export under `data/raw/`.
    pub input_filename: String,
    /// Column header mapping for this source's table.
    pub columns: ColumnMapping,
}

/// Column headers for one kind of source table.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnMapping {
    /// The per-council, per-financial-year waste statistics table.
    Waste {
        /// Council name column.
        council: String,
        /// Financial-year label column.
        financial_year: String,
        /// Population column.
        population: String,
        /// Kerbside recycling collected tonnage column.
        collected_tonnes: String,
        /// Kerbside recycling recycled tonnage column.
        recycled_tonnes: String,
    },
    /// The e-waste facility register table.
    Facilities {
        /// Facility display name column.
        name: String,
        /// Operating organisation column.
        owner: String,
        /// Facility type column.
        facility_type: String,
        /// Infrastructure type column.
        infrastructure_type: String,
        /// Street address column.
        address: String,
        /// Suburb column.
        suburb: String,
        /// Local government area column.
        lga: String,
        /// Latitude column.
        latitude: String,
        /// Longitude column.
        longitude: String,
    },
}

impl ColumnMapping {
    /// Returns every column header this mapping requires, for structural
    /// validation against the table actually read.
    #[must_use]
    pub fn expected_columns(&self) -> Vec<&str> {
        match self {
            Self::Waste {
                council,
                financial_year,
                population,
                collected_tonnes,
                recycled_tonnes,
            } => vec![
                council,
                financial_year,
                population,
                collected_tonnes,
                recycled_tonnes,
            ],
            Self::Facilities {
                name,
                owner,
                facility_type,
                infrastructure_type,
                address,
                suburb,
                lga,
                latitude,
                longitude,
            } => vec![
                name,
                owner,
                facility_type,
                infrastructure_type,
                address,
                suburb,
                lga,
                latitude,
                longitude,
            ],
        }
    }
}

/// Parses a [`SourceDefinition`] from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or missing required fields.
pub fn parse_source_toml(toml_str: &str) -> Result<SourceDefinition, String> {
    toml::de::from_str(toml_str).map_err(|e| e.to_string())
}
