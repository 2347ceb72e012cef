//! Order statistics over a bracket's salaries.

use crate::types::SalaryStats;

/// Stored salaries are in thousands; surfaced figures are in full units.
pub const UNIT_MULTIPLIER: f64 = 1000.0;

/// Linear-interpolation percentile over an ascending-sorted slice (R-7).
///
/// The target rank is `(n - 1) * p`; when it falls between two elements the
/// result is interpolated linearly between them. `p = 0` and `p = 1` land
/// exactly on the first and last element.
fn percentile(sorted: &[i64], p: f64) -> f64 {
    let idx = (sorted.len() - 1) as f64 * p;
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;

    if lower == upper {
        return sorted[lower] as f64;
    }

    let fraction = idx - lower as f64;
    sorted[lower] as f64 + (sorted[upper] as f64 - sorted[lower] as f64) * fraction
}

/// Computes min, max and quartiles of a bracket's salaries, scaled to full
/// currency units.
///
/// # Panics
///
/// Panics if `salaries` is empty. Callers guarantee non-empty input: empty
/// brackets are dropped during grouping and never reach this function.
pub fn compute_stats(salaries: &[i64]) -> SalaryStats {
    let mut sorted = salaries.to_vec();
    sorted.sort_unstable();

    SalaryStats {
        min: sorted[0] as f64 * UNIT_MULTIPLIER,
        max: sorted[sorted.len() - 1] as f64 * UNIT_MULTIPLIER,
        q1: percentile(&sorted, 0.25) * UNIT_MULTIPLIER,
        median: percentile(&sorted, 0.5) * UNIT_MULTIPLIER,
        q3: percentile(&sorted, 0.75) * UNIT_MULTIPLIER,
    }
}
