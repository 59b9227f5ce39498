#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Risk scoring and ranking over normalized waste records.
//!
//! Two layers live here. [`normalize`] turns raw observations into the
//! immutable [`NormalizedRecord`](ewaste_map_waste_models::NormalizedRecord)
//! set, computing recovery rate, risk score, and per-capita metrics and
//! resolving duplicate (council, year) rows last-write-wins. The
//! [`engine`] answers the dashboard's query shapes — ranking by year,
//! trend by council, threshold alerting — as pure O(n) scans over that
//! set. The dataset is bounded (dozens of councils, a few decades of
//! years), so no index or cache is kept; every query recomputes.

pub mod dataset;
pub mod engine;
pub mod normalize;

pub use dataset::build_dataset;
pub use engine::{above_threshold, latest_year_start, rank_for_year, trend_for_council};
pub use normalize::{normalize, normalize_with_report, IngestReport};
