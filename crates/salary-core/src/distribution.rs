//! Salary-range histogram over a filtered subset.

use crate::types::RangeBucket;

/// Fixed salary ranges (bounds in stored thousands); `None` upper bound is
/// the open-ended top range.
const RANGES: [(&str, Option<i64>); 6] = [
    ("0-30k", Some(30)),
    ("30-60k", Some(60)),
    ("60-90k", Some(90)),
    ("90-120k", Some(120)),
    ("120-150k", Some(150)),
    ("150k+", None),
];

fn range_index(salary: i64) -> usize {
    RANGES
        .iter()
        .position(|(_, upper)| upper.map_or(true, |bound| salary < bound))
        .expect("the last range is open-ended")
}

/// Counts salaries per fixed range, ascending; ranges with no observations
/// are omitted.
pub fn distribution(salaries: &[i64]) -> Vec<RangeBucket> {
    let mut counts = [0usize; RANGES.len()];

    for &salary in salaries {
        counts[range_index(salary)] += 1;
    }

    RANGES
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(&(label, _), count)| RangeBucket { range: label, count })
        .collect()
}
