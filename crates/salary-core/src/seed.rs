//! Seed-file parsing.
//!
//! The source dataset is a nested JSON document keyed by country, then by
//! technology label:
//!
//! ```json
//! {
//!   "Germany": {
//!     "Rust": {
//!       "entries": [
//!         {"metadata": {"Country": "Germany", "Language": "Rust",
//!                       "Experience": "3–5 years"}, "value": 70}
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! Observation fields are taken from each entry's `metadata` block, not
//! from the outer keys.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::types::SalaryObservation;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed seed data: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct TechnologyEntries {
    entries: Vec<SeedEntry>,
}

#[derive(Debug, Deserialize)]
struct SeedEntry {
    metadata: SeedMetadata,
    value: i64,
}

#[derive(Debug, Deserialize)]
struct SeedMetadata {
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Language")]
    language: String,
    #[serde(rename = "Experience")]
    experience: String,
}

type SeedFile = HashMap<String, HashMap<String, TechnologyEntries>>;

/// Parses the nested seed document into flat observations.
pub fn parse(json: &str) -> Result<Vec<SalaryObservation>, SeedError> {
    let seed: SeedFile = serde_json::from_str(json)?;

    let observations = seed
        .into_values()
        .flat_map(HashMap::into_values)
        .flat_map(|technology| technology.entries)
        .map(|entry| SalaryObservation {
            country: entry.metadata.country,
            language: entry.metadata.language,
            experience: entry.metadata.experience,
            salary: entry.value,
        })
        .collect();

    Ok(observations)
}

/// Reads and parses a seed file from disk.
pub fn load(path: &Path) -> Result<Vec<SalaryObservation>, SeedError> {
    let json = std::fs::read_to_string(path)?;
    parse(&json)
}
