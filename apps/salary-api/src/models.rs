//! Wire models for the salary API

use salary_core::SalaryObservation;
use serde::Deserialize;
use sqlx::FromRow;

/// Salary row as stored in SQLite
#[derive(Debug, Clone, FromRow)]
pub struct SalaryRow {
    pub country: String,
    pub language: String,
    pub experience: String,
    pub salary: i64,
}

impl From<SalaryRow> for SalaryObservation {
    fn from(row: SalaryRow) -> Self {
        SalaryObservation {
            country: row.country,
            language: row.language,
            experience: row.experience,
            salary: row.salary,
        }
    }
}

/// Query parameters accepted by the salaries endpoints. Both are optional;
/// an absent country matches nothing and an absent language matches every
/// technology label.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalaryQuery {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}
