//! HTTP handlers for the salary API
//!
//! All handlers are thin pass-throughs into the core pipeline. The read
//! path is total: unknown filter values produce an empty 200 response,
//! never an error.

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use salary_core::{BracketBreakdown, Facets, RangeBucket};

use crate::models::SalaryQuery;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Distinct languages and countries for the client's selection controls
pub async fn get_filters(State(state): State<Arc<AppState>>) -> Json<Facets> {
    Json(state.store.facets())
}

/// Per-experience-bracket salary statistics for one country and technology
/// token, in canonical bracket order
pub async fn get_salaries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SalaryQuery>,
) -> Json<Vec<BracketBreakdown>> {
    let country = params.country.as_deref().unwrap_or("");
    let language = params.language.as_deref().unwrap_or("");

    let results = state.store.query(country, language);
    tracing::debug!(
        "Salary query: country='{}' language='{}' -> {} brackets",
        country,
        language,
        results.len()
    );

    Json(results)
}

/// Salary-range histogram of the filtered subset
pub async fn get_distribution(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SalaryQuery>,
) -> Json<Vec<RangeBucket>> {
    let country = params.country.as_deref().unwrap_or("");
    let language = params.language.as_deref().unwrap_or("");

    Json(state.store.distribution(country, language))
}

/// Canonical experience-bracket labels present in the dataset
pub async fn get_experience_levels(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<&'static str>> {
    Json(state.store.experience_levels())
}
