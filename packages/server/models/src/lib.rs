#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the e-waste map server.
//!
//! These types are serialized to JSON for the REST API. They wrap the
//! published record types rather than redefining them so the API stays
//! byte-compatible with the static artifact the frontend can also load
//! directly.

use ewaste_map_waste_models::{NormalizedRecord, RankingRow, RiskBand};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Query parameters for the ranking endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingQueryParams {
    /// Year to rank. Defaults to the dataset's latest year.
    pub year_start: Option<i32>,
}

/// Query parameters for the trend endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendQueryParams {
    /// Council name, matched exactly against the stored records.
    pub council: String,
}

/// Query parameters for the alerts endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertQueryParams {
    /// Inclusive risk-score threshold in percent. Defaults to the
    /// Very-high band's lower bound.
    pub threshold: Option<f64>,
    /// Year to alert on. Defaults to the dataset's latest year.
    pub year_start: Option<i32>,
}

/// Query parameters for the facilities endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityQueryParams {
    /// Filter to one suburb (case-insensitive; stored suburbs are
    /// uppercase).
    pub suburb: Option<String>,
}

/// Ranking response: one year's councils by descending risk.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRanking {
    /// The year the ranking covers.
    pub year_start: i32,
    /// Ranked rows, highest risk first. Empty when the year has no
    /// scored records.
    pub rows: Vec<RankingRow>,
}

/// Trend response: one council's records across all years.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTrend {
    /// The council that was asked for, echoed verbatim.
    pub council: String,
    /// Chronological records, including unscored ones. Empty for an
    /// unknown council.
    pub series: Vec<NormalizedRecord>,
}

/// Alerts response: ranking rows at or above a threshold.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAlerts {
    /// The year the alerts cover.
    pub year_start: i32,
    /// The inclusive threshold that was applied, in percent.
    pub threshold: f64,
    /// Qualifying rows with their legend bands, original ranks kept.
    pub rows: Vec<ApiAlertRow>,
}

/// One alert row: a ranking row annotated with its legend band.
#[derive(Debug, Clone, Serialize)]
pub struct ApiAlertRow {
    /// The underlying ranking row, flattened into this object.
    #[serde(flatten)]
    pub row: RankingRow,
    /// Legend classification of the row's risk score.
    pub band: RiskBand,
}

impl From<RankingRow> for ApiAlertRow {
    fn from(row: RankingRow) -> Self {
        let band = RiskBand::from_score(Some(row.risk_score));
        Self { row, band }
    }
}
