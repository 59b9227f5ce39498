#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the e-waste map application.
//!
//! Serves the ranking, trend, alert, and facility queries for the staff
//! dashboard and resident portal, plus the raw published artifacts as
//! static files. Both artifacts are loaded once at startup into
//! immutable shared state; every handler is a pure function over that
//! snapshot, so concurrent requests need no locking.

mod handlers;

use std::path::Path;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use ewaste_map_facilities::FacilityDirectory;
use ewaste_map_waste_models::{Dataset, NormalizedRecord};

/// Shared application state: the dataset snapshot, loaded once.
pub struct AppState {
    /// The published risk dataset envelope.
    pub dataset: Dataset,
    /// Every record, flattened out of the grouped view for the engine's
    /// slice-based queries.
    pub records: Vec<NormalizedRecord>,
    /// The facility directory, empty when its artifact is absent.
    pub facilities: FacilityDirectory,
}

/// Flattens the grouped-by-council view back into one record slice.
///
/// The envelope's invariant — every record in exactly one council's
/// sequence — makes this lossless.
#[must_use]
pub fn flatten_records(dataset: &Dataset) -> Vec<NormalizedRecord> {
    dataset
        .timeseries_by_council
        .values()
        .flat_map(|series| series.iter().cloned())
        .collect()
}

/// Loads the published artifacts from `data/generated/`.
///
/// # Panics
///
/// Panics if the risk dataset artifact is missing or unreadable — the
/// server cannot answer anything without it. A missing facility
/// directory only logs a warning and serves an empty directory.
#[must_use]
pub fn load_state(data_dir: &Path) -> AppState {
    let risk_path = data_dir.join("vic_lga_risk.json");
    let contents = std::fs::read_to_string(&risk_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", risk_path.display()));
    let dataset: Dataset = serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {e}", risk_path.display()));
    let records = flatten_records(&dataset);
    log::info!(
        "Loaded risk dataset: {} records, {} councils, latest year {}",
        records.len(),
        dataset.timeseries_by_council.len(),
        dataset.latest_year_start
    );

    let facilities_path = data_dir.join("facilities_vic.json");
    let facilities = match std::fs::read_to_string(&facilities_path) {
        Ok(contents) => match serde_json::from_str::<FacilityDirectory>(&contents) {
            Ok(directory) => {
                log::info!("Loaded {} facilities", directory.facilities.len());
                directory
            }
            Err(e) => {
                log::warn!(
                    "Failed to parse {}: {e}; serving empty directory",
                    facilities_path.display()
                );
                FacilityDirectory::default()
            }
        },
        Err(e) => {
            log::warn!(
                "Facility artifact unavailable ({e}); serving empty directory"
            );
            FacilityDirectory::default()
        }
    };

    AppState {
        dataset,
        records,
        facilities,
    }
}

/// Starts the e-waste map API server.
///
/// Loads the published artifacts and starts the Actix-Web HTTP server.
/// This is a regular async function — the caller provides the runtime
/// (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind
/// or encounters a runtime error.
///
/// # Panics
///
/// Panics if the risk dataset artifact cannot be loaded.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    log::info!("Loading published artifacts...");
    let state = web::Data::new(load_state(Path::new("data/generated")));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/dataset", web::get().to(handlers::dataset))
                    .route("/ranking", web::get().to(handlers::ranking))
                    .route("/trend", web::get().to(handlers::trend))
                    .route("/alerts", web::get().to(handlers::alerts))
                    .route("/facilities", web::get().to(handlers::facilities)),
            )
            // Serve the raw published artifacts directly
            .service(Files::new("/data", "data/generated").show_files_listing())
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
