//! Published dataset assembly.
//!
//! Takes the full normalized record set and produces the envelope the
//! frontend consumes: the latest rankable year, its precomputed ranking,
//! and every record grouped by council in chronological order. Grouping
//! uses a `BTreeMap` so council keys serialize in a stable order and two
//! runs over identical input differ only in `generated_at`.

use std::collections::BTreeMap;

use ewaste_map_waste_models::{Dataset, NormalizedRecord};

use crate::engine::{latest_year_start, rank_for_year};

/// Assembles the published envelope from the normalized record set.
///
/// When no record has a risk score, the envelope carries `0` as its
/// `latest_year_start` sentinel and an empty ranking; consumers render
/// that as "data unavailable".
#[must_use]
pub fn build_dataset(
    source_sheet: &str,
    generated_at: String,
    records: Vec<NormalizedRecord>,
) -> Dataset {
    let (latest, ranking) = match latest_year_start(&records) {
        Some(year) => (year, rank_for_year(&records, year)),
        None => (0, Vec::new()),
    };

    let mut timeseries_by_council: BTreeMap<String, Vec<NormalizedRecord>> = BTreeMap::new();
    for record in records {
        timeseries_by_council
            .entry(record.council.clone())
            .or_default()
            .push(record);
    }
    for series in timeseries_by_council.values_mut() {
        series.sort_by_key(|r| r.year_start);
    }

    Dataset {
        generated_at,
        source_sheet: source_sheet.to_owned(),
        latest_year_start: latest,
        ranking,
        timeseries_by_council,
    }
}
