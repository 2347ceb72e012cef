//! The filtering -> bucketing -> statistics pipeline.

use std::collections::HashMap;

use crate::experience::ExperienceBracket;
use crate::stats::compute_stats;
use crate::types::{BracketBreakdown, SalaryObservation};

/// Selects the observations for one country / technology-token pair.
///
/// Country must match exactly; an empty country matches nothing. The
/// technology token matches by case-sensitive substring so that a single
/// token ("TypeScript") still hits composite labels
/// ("JavaScript / TypeScript"); an empty token matches every label.
pub fn filter<'a>(
    observations: &'a [SalaryObservation],
    country: &str,
    language: &str,
) -> Vec<&'a SalaryObservation> {
    if country.is_empty() {
        return Vec::new();
    }

    observations
        .iter()
        .filter(|obs| obs.country == country && obs.language.contains(language))
        .collect()
}

/// Partitions observations into the canonical brackets by exact label
/// equality. Brackets with no observations are absent from the map, and
/// rows carrying a label outside the canonical six belong to no bracket.
pub fn group(observations: &[&SalaryObservation]) -> HashMap<ExperienceBracket, Vec<i64>> {
    let mut groups: HashMap<ExperienceBracket, Vec<i64>> = HashMap::new();

    for obs in observations {
        if let Some(bracket) = ExperienceBracket::from_label(&obs.experience) {
            groups.entry(bracket).or_default().push(obs.salary);
        }
    }

    groups
}

/// Emits one entry per non-empty bracket, in canonical bracket order
/// regardless of the map's iteration order. Output length is 0..=6.
pub fn assemble(groups: &HashMap<ExperienceBracket, Vec<i64>>) -> Vec<BracketBreakdown> {
    ExperienceBracket::CANONICAL
        .iter()
        .filter_map(|bracket| {
            groups.get(bracket).map(|salaries| BracketBreakdown {
                experience: *bracket,
                stats: compute_stats(salaries),
                count: salaries.len(),
            })
        })
        .collect()
}
