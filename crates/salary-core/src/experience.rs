//! Canonical experience brackets and their fixed ordering.

use serde::{Deserialize, Serialize};

/// The six professional-experience brackets used by the salary dataset.
///
/// Responses always list brackets in [`ExperienceBracket::CANONICAL`] order,
/// never in discovery order. Serializes as the exact label string stored in
/// the data (note the en-dashes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceBracket {
    #[serde(rename = "<1 year")]
    UnderOneYear,
    #[serde(rename = "1–2 years")]
    OneToTwo,
    #[serde(rename = "3–5 years")]
    ThreeToFive,
    #[serde(rename = "6–10 years")]
    SixToTen,
    #[serde(rename = "11–16 years")]
    ElevenToSixteen,
    #[serde(rename = "16+ years")]
    SixteenPlus,
}

impl ExperienceBracket {
    /// Fixed response ordering for all six brackets.
    pub const CANONICAL: [ExperienceBracket; 6] = [
        ExperienceBracket::UnderOneYear,
        ExperienceBracket::OneToTwo,
        ExperienceBracket::ThreeToFive,
        ExperienceBracket::SixToTen,
        ExperienceBracket::ElevenToSixteen,
        ExperienceBracket::SixteenPlus,
    ];

    /// The label exactly as stored in the dataset.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceBracket::UnderOneYear => "<1 year",
            ExperienceBracket::OneToTwo => "1–2 years",
            ExperienceBracket::ThreeToFive => "3–5 years",
            ExperienceBracket::SixToTen => "6–10 years",
            ExperienceBracket::ElevenToSixteen => "11–16 years",
            ExperienceBracket::SixteenPlus => "16+ years",
        }
    }

    /// Exact-equality lookup against the six canonical labels.
    pub fn from_label(label: &str) -> Option<ExperienceBracket> {
        Self::CANONICAL.iter().find(|b| b.label() == label).copied()
    }
}

impl std::fmt::Display for ExperienceBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for bracket in ExperienceBracket::CANONICAL {
            assert_eq!(ExperienceBracket::from_label(bracket.label()), Some(bracket));
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        assert_eq!(ExperienceBracket::from_label("2-3 years"), None);
        assert_eq!(ExperienceBracket::from_label("1-2 years"), None); // hyphen, not en-dash
        assert_eq!(ExperienceBracket::from_label(""), None);
    }

    #[test]
    fn test_canonical_order_is_fixed() {
        let labels: Vec<&str> = ExperienceBracket::CANONICAL.iter().map(|b| b.label()).collect();
        assert_eq!(
            labels,
            ["<1 year", "1–2 years", "3–5 years", "6–10 years", "11–16 years", "16+ years"]
        );
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&ExperienceBracket::OneToTwo).unwrap();
        assert_eq!(json, "\"1–2 years\"");

        let back: ExperienceBracket = serde_json::from_str("\"16+ years\"").unwrap();
        assert_eq!(back, ExperienceBracket::SixteenPlus);
    }
}
