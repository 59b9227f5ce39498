//! Pure query layer over the normalized record set.
//!
//! Every operation is a full scan over an immutable slice, re-run per
//! request. Absence of data — an unknown council, a year with no scored
//! records — is an empty result, never an error; the calling layer
//! renders the empty state.

use ewaste_map_waste_models::{NormalizedRecord, RankingRow};

/// Ranks the records of one year by descending risk score.
///
/// Only records whose `year_start` matches and whose risk score is
/// present qualify; a council without a record for the year is simply
/// absent. The sort is stable, so equal scores keep input order, and
/// ranks run `1..=N` by final position.
#[must_use]
pub fn rank_for_year(records: &[NormalizedRecord], year_start: i32) -> Vec<RankingRow> {
    let mut qualifying: Vec<&NormalizedRecord> = records
        .iter()
        .filter(|r| r.year_start == Some(year_start) && r.risk_score.is_some())
        .collect();

    qualifying.sort_by(|a, b| {
        // Both scores present by the filter above; descending.
        let a_score = a.risk_score.unwrap_or(f64::NEG_INFINITY);
        let b_score = b.risk_score.unwrap_or(f64::NEG_INFINITY);
        b_score.total_cmp(&a_score)
    });

    qualifying
        .into_iter()
        .enumerate()
        .filter_map(|(idx, r)| {
            let (Some(risk_score), Some(recovery_rate), Some(collected), Some(recycled)) = (
                r.risk_score,
                r.recovery_rate,
                r.recycling_collected_tonnes,
                r.recycling_recycled_tonnes,
            ) else {
                // Unreachable: a scored record always carries all four.
                return None;
            };
            #[allow(clippy::cast_possible_truncation)]
            Some(RankingRow {
                rank: idx as u32 + 1,
                council: r.council.clone(),
                financial_year: r.financial_year.clone(),
                risk_score,
                recovery_rate,
                recycling_collected_tonnes: collected,
                recycling_recycled_tonnes: recycled,
                population: r.population,
            })
        })
        .collect()
}

/// Returns one council's records across all years, ascending by
/// `year_start`.
///
/// Council matching is exact — canonicalization is a presentation
/// concern. Records with an unparseable year label are retained and sort
/// first, deterministically. An unknown council yields an empty series.
#[must_use]
pub fn trend_for_council(records: &[NormalizedRecord], council: &str) -> Vec<NormalizedRecord> {
    let mut series: Vec<NormalizedRecord> = records
        .iter()
        .filter(|r| r.council == council)
        .cloned()
        .collect();
    // Option<i32> orders None first; stable sort keeps ties deterministic.
    series.sort_by_key(|r| r.year_start);
    series
}

/// The most recent `year_start` among records that can be ranked.
///
/// `None` means no record anywhere has a risk score — "ranking
/// unavailable", which callers must treat as an empty state rather than
/// an error.
#[must_use]
pub fn latest_year_start(records: &[NormalizedRecord]) -> Option<i32> {
    records
        .iter()
        .filter(|r| r.risk_score.is_some())
        .filter_map(|r| r.year_start)
        .max()
}

/// Filters an already-sorted ranking to rows at or above the threshold.
///
/// The boundary is inclusive and the input order is preserved, ranks
/// included, so callers can show original positions in the alert list.
#[must_use]
pub fn above_threshold(ranking: &[RankingRow], threshold_percent: f64) -> Vec<RankingRow> {
    ranking
        .iter()
        .filter(|row| row.risk_score >= threshold_percent)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(council: &str, year: Option<i32>, collected: f64, recycled: f64) -> NormalizedRecord {
        let recovery_rate = (collected > 0.0).then(|| recycled / collected);
        NormalizedRecord {
            council: council.to_owned(),
            financial_year: year.map_or_else(|| "unknown".to_owned(), |y| format!("{y}-{}", y + 1)),
            year_start: year,
            population: None,
            recycling_collected_tonnes: Some(collected),
            recycling_recycled_tonnes: Some(recycled),
            recovery_rate,
            risk_score: recovery_rate.map(|r| (1.0 - r) * 100.0),
            recycling_tonnes_per_capita: None,
        }
    }

    #[test]
    fn ranking_sorts_descending_with_dense_ranks() {
        let records = vec![
            record("Low", Some(2021), 100.0, 90.0),   // score 10
            record("High", Some(2021), 100.0, 40.0),  // score 60
            record("Mid", Some(2021), 100.0, 70.0),   // score 30
        ];
        let ranking = rank_for_year(&records, 2021);
        let councils: Vec<&str> = ranking.iter().map(|r| r.council.as_str()).collect();
        assert_eq!(councils, vec!["High", "Mid", "Low"]);
        let ranks: Vec<u32> = ranking.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn ranking_excludes_unscored_and_other_years() {
        let records = vec![
            record("A", Some(2021), 100.0, 80.0),
            record("B", Some(2021), 0.0, 0.0),  // unscored
            record("C", Some(2020), 100.0, 50.0), // other year
            record("D", None, 100.0, 50.0),       // no year
        ];
        let ranking = rank_for_year(&records, 2021);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].council, "A");
    }

    #[test]
    fn ranking_for_absent_year_is_empty() {
        let records = vec![record("A", Some(2021), 100.0, 80.0)];
        assert!(rank_for_year(&records, 1999).is_empty());
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let records = vec![
            record("First", Some(2021), 100.0, 70.0),
            record("Second", Some(2021), 200.0, 140.0), // same 30% score
            record("Third", Some(2021), 100.0, 70.0),
        ];
        let ranking = rank_for_year(&records, 2021);
        let councils: Vec<&str> = ranking.iter().map(|r| r.council.as_str()).collect();
        assert_eq!(councils, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn trend_is_ascending_with_gaps_preserved() {
        let records = vec![
            record("Monash", Some(2021), 100.0, 80.0),
            record("Yarra", Some(2020), 100.0, 80.0),
            record("Monash", Some(2019), 100.0, 85.0),
        ];
        let trend = trend_for_council(&records, "Monash");
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].year_start, Some(2019));
        assert_eq!(trend[1].year_start, Some(2021));
    }

    #[test]
    fn trend_retains_unscored_records_and_sorts_null_years_first() {
        let records = vec![
            record("Yarra", Some(2020), 100.0, 80.0),
            record("Yarra", None, 0.0, 0.0),
        ];
        let trend = trend_for_council(&records, "Yarra");
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].year_start, None);
        assert_eq!(trend[0].risk_score, None);
    }

    #[test]
    fn trend_for_unknown_council_is_empty() {
        let records = vec![record("Yarra", Some(2020), 100.0, 80.0)];
        assert!(trend_for_council(&records, "Atlantis").is_empty());
    }

    #[test]
    fn trend_matching_is_exact_not_fuzzy() {
        let records = vec![record("Yarra", Some(2020), 100.0, 80.0)];
        assert!(trend_for_council(&records, "yarra").is_empty());
    }

    #[test]
    fn latest_year_ignores_unscored_records() {
        let records = vec![
            record("A", Some(2022), 0.0, 0.0), // unscored
            record("B", Some(2020), 100.0, 80.0),
        ];
        assert_eq!(latest_year_start(&records), Some(2020));
    }

    #[test]
    fn latest_year_is_none_when_nothing_is_scored() {
        let records = vec![record("A", Some(2022), 0.0, 0.0)];
        assert_eq!(latest_year_start(&records), None);
        assert_eq!(latest_year_start(&[]), None);
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let records = vec![
            record("Exact", Some(2021), 100.0, 65.0), // score 35
            record("Below", Some(2021), 100.0, 65.1), // score 34.9
            record("Above", Some(2021), 100.0, 40.0), // score 60
        ];
        let ranking = rank_for_year(&records, 2021);
        let alerts = above_threshold(&ranking, 35.0);
        let councils: Vec<&str> = alerts.iter().map(|r| r.council.as_str()).collect();
        assert_eq!(councils, vec!["Above", "Exact"]);
    }

    #[test]
    fn full_risk_only_at_zero_recovery() {
        let records = vec![
            record("Nothing", Some(2021), 100.0, 0.0), // score 100
            record("Almost", Some(2021), 100.0, 1.0),  // score 99
        ];
        let ranking = rank_for_year(&records, 2021);
        let alerts = above_threshold(&ranking, 100.0);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].council, "Nothing");
    }

    #[test]
    fn alerts_preserve_original_ranks() {
        let records = vec![
            record("A", Some(2021), 100.0, 40.0), // score 60, rank 1
            record("B", Some(2021), 100.0, 70.0), // score 30, rank 2
            record("C", Some(2021), 100.0, 50.0), // score 50 -> actually rank 2
        ];
        let ranking = rank_for_year(&records, 2021);
        let alerts = above_threshold(&ranking, 50.0);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].rank, 1);
        assert_eq!(alerts[1].rank, 2);
        assert_eq!(alerts[1].council, "C");
    }
}
