//! Source registry — loads all source definitions from embedded TOML
//! configs.
//!
//! Each `.toml` file in `packages/source/sources/` is baked into the
//! binary at compile time via [`include_str!`]. Adding a new source is a
//! matter of creating a TOML file and adding it to the list below.

use crate::source_def::{SourceDefinition, parse_source_toml};

/// TOML configs embedded at compile time.
const SOURCE_TOMLS: &[(&str, &str)] = &[
    ("vic_lga_waste", include_str!("../sources/vic_lga_waste.toml")),
    ("vic_facilities", include_str!("../sources/vic_facilities.toml")),
];

/// Total number of configured sources (used in tests).
#[cfg(test)]
const EXPECTED_SOURCE_COUNT: usize = 2;

/// Returns all configured source definitions, parsed from embedded TOML.
///
/// # Panics
///
/// Panics if any TOML config is malformed (this is a compile-time
/// guarantee since the configs are embedded).
#[must_use]
pub fn all_sources() -> Vec<SourceDefinition> {
    SOURCE_TOMLS
        .iter()
        .map(|(name, toml)| {
            parse_source_toml(toml).unwrap_or_else(|e| panic!("Failed to parse {name}.toml: {e}"))
        })
        .collect()
}

/// Looks up a single source definition by ID.
#[must_use]
pub fn find_source(id: &str) -> Option<SourceDefinition> {
    all_sources().into_iter().find(|def| def.id == id)
}
