//! Core pipeline for the salary explorer: filtering, experience bucketing
//! and percentile statistics over a flat table of salary observations.
//!
//! The store is built once from seeded data and is read-only afterwards, so
//! it can be shared across request handlers without synchronization.

pub mod distribution;
pub mod experience;
pub mod pipeline;
pub mod seed;
pub mod stats;
pub mod types;

pub use experience::ExperienceBracket;
pub use types::{BracketBreakdown, Facets, RangeBucket, SalaryObservation, SalaryStats};

use std::collections::BTreeSet;

/// Immutable collection of salary observations plus the read paths over it.
#[derive(Debug, Clone)]
pub struct SalaryStore {
    observations: Vec<SalaryObservation>,
}

impl SalaryStore {
    pub fn new(observations: Vec<SalaryObservation>) -> Self {
        Self { observations }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Distinct languages and countries, each sorted ascending, for the
    /// client's selection controls.
    pub fn facets(&self) -> Facets {
        let languages: BTreeSet<&str> =
            self.observations.iter().map(|o| o.language.as_str()).collect();
        let countries: BTreeSet<&str> =
            self.observations.iter().map(|o| o.country.as_str()).collect();

        Facets {
            languages: languages.into_iter().map(String::from).collect(),
            countries: countries.into_iter().map(String::from).collect(),
        }
    }

    /// Runs the full pipeline for one country / technology-token pair:
    /// filter, bucket by experience, compute per-bracket statistics, and
    /// order the result canonically.
    pub fn query(&self, country: &str, language: &str) -> Vec<BracketBreakdown> {
        let filtered = pipeline::filter(&self.observations, country, language);
        let groups = pipeline::group(&filtered);
        pipeline::assemble(&groups)
    }

    /// Salary-range histogram of the filtered subset.
    pub fn distribution(&self, country: &str, language: &str) -> Vec<RangeBucket> {
        let salaries: Vec<i64> = pipeline::filter(&self.observations, country, language)
            .iter()
            .map(|o| o.salary)
            .collect();
        distribution::distribution(&salaries)
    }

    /// Canonical bracket labels with at least one observation in the store,
    /// in canonical order.
    pub fn experience_levels(&self) -> Vec<&'static str> {
        ExperienceBracket::CANONICAL
            .iter()
            .filter(|bracket| {
                self.observations.iter().any(|o| o.experience == bracket.label())
            })
            .map(|bracket| bracket.label())
            .collect()
    }
}
