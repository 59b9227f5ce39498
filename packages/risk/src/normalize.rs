//! Raw observation to normalized record conversion.
//!
//! Rows without a council or financial year after trimming are dropped
//! silently. Everything else survives: a row whose numbers are missing
//! or nonsensical still produces a record, just with `None` metrics, so
//! trends can show the gap. Nothing in here raises for bad data.

use std::collections::HashMap;

use ewaste_map_source_models::RawObservation;
use ewaste_map_waste_models::NormalizedRecord;

/// Counts describing one normalization run.
///
/// Diagnostics only — the record set itself is the primary output and
/// never changes shape based on these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Raw rows seen.
    pub rows_read: usize,
    /// Rows dropped for a blank council or financial year.
    pub rows_dropped: usize,
    /// Rows that replaced an earlier row for the same (council, year).
    pub duplicates_replaced: usize,
    /// Records emitted without a computable risk score.
    pub unscored: usize,
}

/// Normalizes raw observations into the immutable record set.
pub fn normalize(rows: &[RawObservation]) -> Vec<NormalizedRecord> {
    normalize_with_report(rows).0
}

/// Normalizes raw observations and reports what happened to them.
///
/// Duplicate (council, year-start) pairs resolve last-write-wins: the
/// surviving record keeps the first occurrence's position in the output
/// and the last occurrence's data. Unparseable year labels share a
/// single `None` slot per council.
pub fn normalize_with_report(rows: &[RawObservation]) -> (Vec<NormalizedRecord>, IngestReport) {
    let mut report = IngestReport {
        rows_read: rows.len(),
        ..IngestReport::default()
    };

    let mut records: Vec<NormalizedRecord> = Vec::with_capacity(rows.len());
    let mut index: HashMap<(String, Option<i32>), usize> = HashMap::new();

    for row in rows {
        let council = row.council.trim();
        let financial_year = row.financial_year.trim();
        if council.is_empty() || financial_year.is_empty() {
            report.rows_dropped += 1;
            continue;
        }

        let record = normalize_row(council, financial_year, row);
        let key = (record.council.clone(), record.year_start);

        if let Some(&existing) = index.get(&key) {
            log::debug!(
                "duplicate row for {} {}: keeping last-seen data",
                record.council,
                record.financial_year
            );
            records[existing] = record;
            report.duplicates_replaced += 1;
        } else {
            index.insert(key, records.len());
            records.push(record);
        }
    }

    report.unscored = records.iter().filter(|r| r.risk_score.is_none()).count();

    (records, report)
}

/// Builds one record from a row with a non-blank identity.
fn normalize_row(council: &str, financial_year: &str, row: &RawObservation) -> NormalizedRecord {
    let year_start = parse_year_start(financial_year);
    let collected = row.collected_tonnes;
    let recycled = row.recycled_tonnes;

    // Division by zero must never occur: a zero or negative collected
    // tonnage yields no rate at all, not infinity.
    let recovery_rate = match (collected, recycled) {
        (Some(c), Some(r)) if c > 0.0 => Some(r / c),
        _ => None,
    };

    // Not clamped: recycled > collected yields a negative score, which
    // surfaces the data-quality problem instead of masking it.
    let risk_score = recovery_rate.map(|rate| (1.0 - rate) * 100.0);

    #[allow(clippy::cast_precision_loss)]
    let per_capita = match (collected, row.population) {
        (Some(c), Some(p)) if p > 0 => Some(c / p as f64),
        _ => None,
    };

    NormalizedRecord {
        council: council.to_owned(),
        financial_year: financial_year.to_owned(),
        year_start,
        population: row.population,
        recycling_collected_tonnes: collected,
        recycling_recycled_tonnes: recycled,
        recovery_rate,
        risk_score,
        recycling_tonnes_per_capita: per_capita,
    }
}

/// Leading `"YYYY-"` year of a financial-year label, if present.
fn parse_year_start(label: &str) -> Option<i32> {
    let bytes = label.as_bytes();
    if bytes.len() < 5 || bytes[4] != b'-' || !bytes[..4].iter().all(u8::is_ascii_digit) {
        return None;
    }
    label[..4].parse().ok()
}
