#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! CLI tool for building the published JSON artifacts.
//!
//! Converts the raw government CSV exports under `data/raw/` into the
//! risk dataset and facility directory JSON under `data/generated/`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ewaste_map_generate::{build_facilities, build_risk};

#[derive(Parser)]
#[command(name = "ewaste_map_generate", about = "Artifact build tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the council risk dataset
    Risk {
        /// Raw waste statistics CSV (defaults to `data/raw/vic_lga_waste.csv`)
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Build the facility directory
    Facilities {
        /// Raw facility register CSV (defaults to `data/raw/vic_facilities.csv`)
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Build every artifact from the conventional raw locations
    All,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Risk { input } => {
            build_risk(input.as_deref())?;
        }
        Commands::Facilities { input } => {
            build_facilities(input.as_deref())?;
        }
        Commands::All => {
            build_risk(None)?;
            build_facilities(None)?;
        }
    }

    Ok(())
}
