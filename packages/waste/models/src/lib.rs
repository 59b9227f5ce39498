#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Canonical waste record types and the risk band taxonomy.
//!
//! This crate defines the normalized per-council, per-financial-year
//! record produced by ingestion, the derived ranking row, the published
//! dataset envelope, and the [`RiskBand`] classification used by the
//! dashboard legend. Field names on the serialized forms are a stable
//! contract with downstream consumers and must not change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// One council's waste statistics for one financial year, normalized.
///
/// Produced once per ingestion run and immutable thereafter. A record has
/// a non-null `risk_score` iff both tonnages are present and the collected
/// tonnage is positive; records failing that are still emitted (so trends
/// show gaps) but are excluded from ranking.
///
/// Serialized field names are exactly the published record contract:
/// snake_case, with absent values as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Council name, trimmed but otherwise verbatim from the source.
    pub council: String,
    /// Financial-year label as published (e.g. `"2020-2021"`).
    pub financial_year: String,
    /// First 4-digit year of the label. `None` if the label is unparseable.
    pub year_start: Option<i32>,
    /// Resident population. `None` when absent or not a whole number.
    pub population: Option<u64>,
    /// Kerbside recycling collected, in tonnes.
    pub recycling_collected_tonnes: Option<f64>,
    /// Kerbside recycling successfully recycled, in tonnes.
    pub recycling_recycled_tonnes: Option<f64>,
    /// Fraction of collected tonnage that was recycled, in `[0, 1]` for
    /// well-formed data. Not clamped.
    pub recovery_rate: Option<f64>,
    /// `(1 - recovery_rate) * 100`. Already a percentage; consumers must
    /// not re-scale it.
    pub risk_score: Option<f64>,
    /// Collected tonnes per resident.
    pub recycling_tonnes_per_capita: Option<f64>,
}

/// One row of a per-year risk ranking, highest risk first.
///
/// Only records with a computed risk score qualify, so the score, rate,
/// and both tonnages are always present here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRow {
    /// 1-based position in the ranking.
    pub rank: u32,
    /// Council name.
    pub council: String,
    /// Financial-year label for the ranked record.
    pub financial_year: String,
    /// Risk score percentage.
    pub risk_score: f64,
    /// Recovery rate fraction.
    pub recovery_rate: f64,
    /// Kerbside recycling collected, in tonnes.
    pub recycling_collected_tonnes: f64,
    /// Kerbside recycling recycled, in tonnes.
    pub recycling_recycled_tonnes: f64,
    /// Resident population, when the source row carried one.
    pub population: Option<u64>,
}

/// The published dataset artifact.
///
/// Envelope keys are camelCase; the records inside keep their snake_case
/// contract. The grouped view and the flat record set are consistent:
/// every record appears in exactly one council's sequence, sorted
/// ascending by `year_start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// ISO 8601 generation timestamp. The only field that differs between
    /// two runs over identical input.
    pub generated_at: String,
    /// Label of the source table the records were built from.
    pub source_sheet: String,
    /// Latest year-start with a rankable record, or `0` when no record
    /// has a risk score ("ranking unavailable", not an error).
    pub latest_year_start: i32,
    /// Precomputed ranking for `latest_year_start`.
    pub ranking: Vec<RankingRow>,
    /// All records grouped by council, each sequence ascending by
    /// `year_start`.
    pub timeseries_by_council: BTreeMap<String, Vec<NormalizedRecord>>,
}

/// Dashboard legend classification of a risk score.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskBand {
    /// Risk score of 35% or more.
    VeryHigh,
    /// Risk score in `[25, 35)`.
    High,
    /// Risk score in `[15, 25)`.
    Moderate,
    /// Risk score below 15%.
    Low,
    /// No risk score could be computed for the record.
    NoData,
}

impl RiskBand {
    /// Lower bound of the [`Self::VeryHigh`] band, in percent.
    pub const MIN_VERY_HIGH: f64 = 35.0;
    /// Lower bound of the [`Self::High`] band, in percent.
    pub const MIN_HIGH: f64 = 25.0;
    /// Lower bound of the [`Self::Moderate`] band, in percent.
    pub const MIN_MODERATE: f64 = 15.0;

    /// Classifies a risk score. `None` and NaN both mean the score could
    /// not be computed.
    #[must_use]
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            None => Self::NoData,
            Some(s) if s.is_nan() => Self::NoData,
            Some(s) if s >= Self::MIN_VERY_HIGH => Self::VeryHigh,
            Some(s) if s >= Self::MIN_HIGH => Self::High,
            Some(s) if s >= Self::MIN_MODERATE => Self::Moderate,
            Some(_) => Self::Low,
        }
    }

    /// Human-readable legend label for this band.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very high",
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
            Self::NoData => "No data",
        }
    }

    /// Returns all bands in descending severity order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::VeryHigh,
            Self::High,
            Self::Moderate,
            Self::Low,
            Self::NoData,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> NormalizedRecord {
        NormalizedRecord {
            council: "Yarra".to_string(),
            financial_year: "2020-2021".to_string(),
            year_start: Some(2020),
            population: Some(100_000),
            recycling_collected_tonnes: Some(1000.0),
            recycling_recycled_tonnes: Some(800.0),
            recovery_rate: Some(0.8),
            risk_score: Some(20.0),
            recycling_tonnes_per_capita: Some(0.01),
        }
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(RiskBand::from_score(Some(35.0)), RiskBand::VeryHigh);
        assert_eq!(RiskBand::from_score(Some(34.99)), RiskBand::High);
        assert_eq!(RiskBand::from_score(Some(25.0)), RiskBand::High);
        assert_eq!(RiskBand::from_score(Some(24.99)), RiskBand::Moderate);
        assert_eq!(RiskBand::from_score(Some(15.0)), RiskBand::Moderate);
        assert_eq!(RiskBand::from_score(Some(14.99)), RiskBand::Low);
        assert_eq!(RiskBand::from_score(Some(0.0)), RiskBand::Low);
    }

    #[test]
    fn band_handles_missing_and_nan() {
        assert_eq!(RiskBand::from_score(None), RiskBand::NoData);
        assert_eq!(RiskBand::from_score(Some(f64::NAN)), RiskBand::NoData);
    }

    #[test]
    fn negative_score_is_low() {
        // Recycled > collected produces a negative score; the legend shows
        // it as Low rather than hiding the anomaly.
        assert_eq!(RiskBand::from_score(Some(-20.0)), RiskBand::Low);
    }

    #[test]
    fn record_serializes_contract_field_names() {
        let value = serde_json::to_value(record()).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "council",
                "financial_year",
                "population",
                "recovery_rate",
                "recycling_collected_tonnes",
                "recycling_recycled_tonnes",
                "recycling_tonnes_per_capita",
                "risk_score",
                "year_start",
            ]
        );
    }

    #[test]
    fn absent_fields_serialize_as_null() {
        let mut r = record();
        r.risk_score = None;
        r.recovery_rate = None;
        let value = serde_json::to_value(r).unwrap();
        assert!(value["risk_score"].is_null());
        assert!(value["recovery_rate"].is_null());
    }

    #[test]
    fn dataset_envelope_uses_camel_case_keys() {
        let dataset = Dataset {
            generated_at: "2025-06-01T00:00:00.000Z".to_string(),
            source_sheet: "VLGAS v2025.02".to_string(),
            latest_year_start: 2020,
            ranking: Vec::new(),
            timeseries_by_council: BTreeMap::new(),
        };
        let value = serde_json::to_value(dataset).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("generatedAt"));
        assert!(obj.contains_key("sourceSheet"));
        assert!(obj.contains_key("latestYearStart"));
        assert!(obj.contains_key("ranking"));
        assert!(obj.contains_key("timeseriesByCouncil"));
    }

    #[test]
    fn band_labels_match_legend() {
        assert_eq!(RiskBand::VeryHigh.label(), "Very high");
        assert_eq!(RiskBand::NoData.label(), "No data");
        assert_eq!(RiskBand::VeryHigh.to_string(), "VERY_HIGH");
    }
}
