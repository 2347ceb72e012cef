//! Application state for the salary API
//!
//! The record store is built once at startup: migrate, seed the SQLite
//! table from the source JSON if it is empty, then load every observation
//! into an immutable in-memory store. The request path never touches the
//! database, so handlers share the store without synchronization.

use std::path::Path;

use anyhow::Result;
use salary_core::{SalaryObservation, SalaryStore};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::{info, warn};

use crate::models::SalaryRow;

pub struct AppState {
    pub store: SalaryStore,
}

impl AppState {
    pub async fn new() -> Result<Self> {
        // Get database path from env or use default
        let db_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:salary_data.db?mode=rwc".to_string());

        info!("Connecting to database: {}", db_url);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await?;

        Self::run_migrations(&pool).await?;
        Self::seed_if_empty(&pool).await?;

        let store = Self::load_store(&pool).await?;
        info!("Record store ready: {} observations", store.len());

        // The store is immutable from here on
        pool.close().await;

        Ok(Self { store })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        info!("Running database migrations...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS salaries (
                country TEXT NOT NULL,
                language TEXT NOT NULL,
                experience TEXT NOT NULL,
                salary INTEGER NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Index for fast lookups
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_salaries_country ON salaries(country)
            "#,
        )
        .execute(pool)
        .await?;

        info!("Migrations complete");
        Ok(())
    }

    /// One-time population of the salaries table from the nested source
    /// JSON. A missing seed file leaves the dataset empty, which is a valid
    /// (if useless) state; a malformed one is a startup failure.
    async fn seed_if_empty(pool: &SqlitePool) -> Result<()> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM salaries")
            .fetch_one(pool)
            .await?;
        if count > 0 {
            return Ok(());
        }

        let seed_path =
            std::env::var("SEED_DATA").unwrap_or_else(|_| "calculatorData.json".to_string());
        let path = Path::new(&seed_path);
        if !path.exists() {
            warn!("Seed file {} not found; starting with an empty dataset", seed_path);
            return Ok(());
        }

        let observations = salary_core::seed::load(path)?;

        let mut tx = pool.begin().await?;
        for obs in &observations {
            sqlx::query(
                "INSERT INTO salaries (country, language, experience, salary) VALUES (?, ?, ?, ?)",
            )
            .bind(&obs.country)
            .bind(&obs.language)
            .bind(&obs.experience)
            .bind(obs.salary)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        info!("Seeded {} observations from {}", observations.len(), seed_path);
        Ok(())
    }

    async fn load_store(pool: &SqlitePool) -> Result<SalaryStore> {
        let rows: Vec<SalaryRow> =
            sqlx::query_as("SELECT country, language, experience, salary FROM salaries")
                .fetch_all(pool)
                .await?;

        Ok(SalaryStore::new(
            rows.into_iter().map(SalaryObservation::from).collect(),
        ))
    }
}
