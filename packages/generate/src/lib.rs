#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Library for building the published JSON artifacts from raw exports.
//!
//! Reads the raw CSV tables under `data/raw/`, runs normalization and
//! dataset assembly, and writes pretty-printed JSON to `data/generated/`.
//! Writes are atomic (temp file + rename) so an interrupted build never
//! publishes a partial artifact — a structural failure upstream aborts
//! before anything is written at all.
//!
//! No caching or fingerprinting: the whole build is a sub-second full
//! recompute over a bounded table, so skip-if-unchanged machinery would
//! add complexity without benefit.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use ewaste_map_facilities::{normalize_facilities, FacilityDirectory};
use ewaste_map_risk::{build_dataset, normalize_with_report};
use ewaste_map_source::registry::find_source;
use ewaste_map_source::{facilities as facility_reader, waste as waste_reader};
use ewaste_map_waste_models::RiskBand;
use serde::Serialize;

/// Filename of the published risk dataset artifact.
pub const RISK_ARTIFACT: &str = "vic_lga_risk.json";

/// Filename of the published facility directory artifact.
pub const FACILITIES_ARTIFACT: &str = "facilities_vic.json";

/// Returns the workspace root directory.
///
/// Resolved at compile time from `CARGO_MANIFEST_DIR`. This ensures
/// input and output paths are always relative to the project root
/// regardless of the caller's working directory.
///
/// # Panics
///
/// Panics if the project root cannot be resolved from
/// `CARGO_MANIFEST_DIR`.
#[must_use]
pub fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("Failed to find project root from CARGO_MANIFEST_DIR")
        .to_path_buf()
}

/// Conventional directory for raw government exports.
#[must_use]
pub fn raw_dir() -> PathBuf {
    project_root().join("data/raw")
}

/// Directory the published artifacts are written to.
#[must_use]
pub fn output_dir() -> PathBuf {
    project_root().join("data/generated")
}

/// Builds and publishes the risk dataset artifact.
///
/// `input` overrides the conventional raw file location. Returns the
/// path of the published artifact.
///
/// # Errors
///
/// Returns an error on structural ingestion failures (missing file,
/// empty table, missing columns) or if the artifact cannot be written.
/// Row-level problems never fail the build.
pub fn build_risk(input: Option<&Path>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let def = find_source("vic_lga_waste").ok_or("missing vic_lga_waste source definition")?;
    let input_path =
        input.map_or_else(|| raw_dir().join(&def.input_filename), Path::to_path_buf);

    log::info!("Reading {} from {}", def.label, input_path.display());
    let file = File::open(&input_path)?;
    let observations = waste_reader::read_observations(&def, file)?;

    let (records, report) = normalize_with_report(&observations);
    log::info!(
        "Normalized {} records ({} rows read, {} dropped, {} duplicates replaced, {} unscored)",
        records.len(),
        report.rows_read,
        report.rows_dropped,
        report.duplicates_replaced,
        report.unscored
    );

    let dataset = build_dataset(&def.label, timestamp(), records);
    log::info!(
        "Latest year_start: {}, ranking rows: {}",
        dataset.latest_year_start,
        dataset.ranking.len()
    );
    log_band_distribution(&dataset.ranking);

    let out_path = output_dir().join(RISK_ARTIFACT);
    write_json_atomic(&out_path, &dataset)?;
    log::info!("Wrote risk dataset to {}", out_path.display());
    Ok(out_path)
}

/// Builds and publishes the facility directory artifact.
///
/// # Errors
///
/// Same failure surface as [`build_risk`]: structural ingestion errors
/// and write failures only.
pub fn build_facilities(input: Option<&Path>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let def = find_source("vic_facilities").ok_or("missing vic_facilities source definition")?;
    let input_path =
        input.map_or_else(|| raw_dir().join(&def.input_filename), Path::to_path_buf);

    log::info!("Reading {} from {}", def.label, input_path.display());
    let file = File::open(&input_path)?;
    let rows = facility_reader::read_facility_rows(&def, file)?;

    let facilities = normalize_facilities(&rows);
    log::info!(
        "Kept {} of {} facilities (rows without coordinates skipped)",
        facilities.len(),
        rows.len()
    );

    let directory = FacilityDirectory {
        generated_at: timestamp(),
        facilities,
    };

    let out_path = output_dir().join(FACILITIES_ARTIFACT);
    write_json_atomic(&out_path, &directory)?;
    log::info!("Wrote facility directory to {}", out_path.display());
    Ok(out_path)
}

/// RFC 3339 timestamp with millisecond precision and a `Z` suffix, the
/// envelope's `generatedAt` format.
fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Logs how the latest ranking splits across the legend bands.
fn log_band_distribution(ranking: &[ewaste_map_waste_models::RankingRow]) {
    for band in RiskBand::all() {
        let count = ranking
            .iter()
            .filter(|row| RiskBand::from_score(Some(row.risk_score)) == *band)
            .count();
        if count > 0 {
            log::info!("  {}: {count} councils", band.label());
        }
    }
}

/// Writes pretty-printed JSON with an atomic temp-file-and-rename so an
/// interrupted build never leaves a partial artifact behind.
fn write_json_atomic(path: &Path, value: &impl Serialize) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("json.tmp");
    let contents = serde_json::to_string_pretty(value)?;
    std::fs::write(&tmp_path, contents)?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}
