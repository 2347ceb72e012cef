//! Property-based tests for the salary API wire format
//!
//! Verifies that serialized responses keep the contract the visualization
//! client depends on: exact bracket labels, canonical ordering, and stats
//! scaled to full currency units.

use proptest::prelude::*;

use salary_core::{ExperienceBracket, SalaryObservation, SalaryStore};

/// Arbitrary canonical bracket
fn bracket() -> impl Strategy<Value = ExperienceBracket> {
    prop_oneof![
        Just(ExperienceBracket::UnderOneYear),
        Just(ExperienceBracket::OneToTwo),
        Just(ExperienceBracket::ThreeToFive),
        Just(ExperienceBracket::SixToTen),
        Just(ExperienceBracket::ElevenToSixteen),
        Just(ExperienceBracket::SixteenPlus),
    ]
}

/// Single-country observation sets in arbitrary row order
fn observations() -> impl Strategy<Value = Vec<SalaryObservation>> {
    proptest::collection::vec((bracket(), 0i64..500), 1..60)
        .prop_map(|rows| {
            rows.into_iter()
                .map(|(bracket, salary)| SalaryObservation {
                    country: "Remote".to_string(),
                    language: "Rust".to_string(),
                    experience: bracket.label().to_string(),
                    salary,
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: every response entry serializes with a canonical bracket
    /// label, a full stats object, and a positive count
    #[test]
    fn response_entries_have_the_expected_shape(observations in observations()) {
        let store = SalaryStore::new(observations);
        let results = store.query("Remote", "Rust");
        let json = serde_json::to_value(&results).unwrap();

        for entry in json.as_array().unwrap() {
            let label = entry["experience"].as_str().unwrap();
            prop_assert!(ExperienceBracket::from_label(label).is_some());

            for figure in ["min", "max", "q1", "median", "q3"] {
                prop_assert!(entry["stats"][figure].is_number(), "missing stats.{}", figure);
            }

            prop_assert!(entry["count"].as_u64().unwrap() >= 1);
        }
    }

    /// Property: serialized labels appear in canonical bracket order
    #[test]
    fn response_labels_are_canonically_ordered(observations in observations()) {
        let store = SalaryStore::new(observations);
        let json = serde_json::to_value(store.query("Remote", "Rust")).unwrap();

        let labels: Vec<String> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["experience"].as_str().unwrap().to_string())
            .collect();

        let canonical: Vec<&str> = ExperienceBracket::CANONICAL
            .iter()
            .map(|b| b.label())
            .filter(|label| labels.iter().any(|l| l == label))
            .collect();

        prop_assert_eq!(labels, canonical);
    }

    /// Property: surfaced figures are the stored thousands value times 1000
    #[test]
    fn stats_figures_are_scaled_to_full_units(salary in 0i64..500, bracket in bracket()) {
        let store = SalaryStore::new(vec![SalaryObservation {
            country: "Remote".to_string(),
            language: "Rust".to_string(),
            experience: bracket.label().to_string(),
            salary,
        }]);

        let results = store.query("Remote", "Rust");
        prop_assert_eq!(results.len(), 1);

        let expected = salary as f64 * 1000.0;
        let stats = &results[0].stats;
        prop_assert_eq!(stats.min, expected);
        prop_assert_eq!(stats.q1, expected);
        prop_assert_eq!(stats.median, expected);
        prop_assert_eq!(stats.q3, expected);
        prop_assert_eq!(stats.max, expected);
    }

    /// Property: the filters payload always carries both facet arrays
    #[test]
    fn filters_payload_has_both_sequences(observations in observations()) {
        let store = SalaryStore::new(observations);
        let json = serde_json::to_value(store.facets()).unwrap();

        prop_assert!(json["languages"].is_array());
        prop_assert!(json["countries"].is_array());
        prop_assert_eq!(json["countries"].as_array().unwrap().len(), 1);
    }
}
