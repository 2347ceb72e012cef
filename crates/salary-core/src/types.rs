use crate::experience::ExperienceBracket;

/// One salary observation: a single survey respondent.
///
/// `salary` is stored in thousands of a currency unit; `experience` is the
/// raw bracket label exactly as it appears in the source data.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SalaryObservation {
    pub country: String,
    pub language: String, // may be composite, e.g. "JavaScript / TypeScript"
    pub experience: String,
    pub salary: i64,
}

/// Distinct filter values available in the store, for selection controls.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Facets {
    pub languages: Vec<String>,
    pub countries: Vec<String>,
}

/// Order statistics for one experience bracket, scaled to full currency units.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SalaryStats {
    pub min: f64,
    pub max: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

/// One entry of the salaries response: a non-empty bracket with its statistics.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BracketBreakdown {
    pub experience: ExperienceBracket,
    pub stats: SalaryStats,
    pub count: usize,
}

/// One bucket of the salary-range histogram.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RangeBucket {
    pub range: &'static str,
    pub count: usize,
}
