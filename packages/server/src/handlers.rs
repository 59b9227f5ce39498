//! HTTP handler functions for the e-waste map API.
//!
//! Each handler is a pure query over the immutable [`AppState`]
//! snapshot. Absence of data — an unknown council, a year with no
//! ranking — returns an empty collection with a 200, never an error
//! status; the frontend renders the empty state.

use actix_web::{web, HttpResponse};
use ewaste_map_risk::{above_threshold, rank_for_year, trend_for_council};
use ewaste_map_server_models::{
    AlertQueryParams, ApiAlertRow, ApiAlerts, ApiHealth, ApiRanking, ApiTrend,
    FacilityQueryParams, RankingQueryParams, TrendQueryParams,
};
use ewaste_map_waste_models::{RankingRow, RiskBand};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/dataset`
///
/// Returns the full published envelope, byte-equivalent to the static
/// artifact.
pub async fn dataset(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(&state.dataset)
}

/// `GET /api/ranking?yearStart=`
///
/// Ranking for the requested year, defaulting to the latest. The latest
/// year's ranking is precomputed in the envelope; other years recompute
/// through the engine.
pub async fn ranking(
    state: web::Data<AppState>,
    params: web::Query<RankingQueryParams>,
) -> HttpResponse {
    let year_start = params
        .year_start
        .unwrap_or(state.dataset.latest_year_start);
    let rows = ranking_for(&state, year_start);
    HttpResponse::Ok().json(ApiRanking { year_start, rows })
}

/// `GET /api/trend?council=`
///
/// One council's chronological series, gaps and unscored years
/// included. Unknown councils yield an empty series.
pub async fn trend(state: web::Data<AppState>, params: web::Query<TrendQueryParams>) -> HttpResponse {
    let series = trend_for_council(&state.records, &params.council);
    HttpResponse::Ok().json(ApiTrend {
        council: params.into_inner().council,
        series,
    })
}

/// `GET /api/alerts?threshold=&yearStart=`
///
/// Ranking rows at or above the threshold (default: the Very-high
/// band's lower bound), each annotated with its legend band.
pub async fn alerts(
    state: web::Data<AppState>,
    params: web::Query<AlertQueryParams>,
) -> HttpResponse {
    let year_start = params
        .year_start
        .unwrap_or(state.dataset.latest_year_start);
    let threshold = params.threshold.unwrap_or(RiskBand::MIN_VERY_HIGH);

    let ranking = ranking_for(&state, year_start);
    let rows: Vec<ApiAlertRow> = above_threshold(&ranking, threshold)
        .into_iter()
        .map(ApiAlertRow::from)
        .collect();

    HttpResponse::Ok().json(ApiAlerts {
        year_start,
        threshold,
        rows,
    })
}

/// `GET /api/facilities?suburb=`
///
/// The facility directory, optionally filtered to one suburb. Stored
/// suburbs are uppercase, so the filter uppercases its argument.
pub async fn facilities(
    state: web::Data<AppState>,
    params: web::Query<FacilityQueryParams>,
) -> HttpResponse {
    match &params.suburb {
        None => HttpResponse::Ok().json(&state.facilities),
        Some(suburb) => {
            let wanted = suburb.trim().to_uppercase();
            let filtered: Vec<_> = state
                .facilities
                .facilities
                .iter()
                .filter(|f| f.suburb == wanted)
                .collect();
            HttpResponse::Ok().json(filtered)
        }
    }
}

/// Serves the precomputed ranking when the requested year is the
/// latest; recomputes for any other year.
fn ranking_for(state: &AppState, year_start: i32) -> Vec<RankingRow> {
    if year_start == state.dataset.latest_year_start {
        state.dataset.ranking.clone()
    } else {
        rank_for_year(&state.records, year_start)
    }
}
