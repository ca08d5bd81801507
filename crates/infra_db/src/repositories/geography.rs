//! Geography repository implementation
//!
//! Read-only access to the `countries`, `states` and `counties` tables.
//! Each method is a single-row point read by primary key; the tables are
//! joined by the caller one foreign key at a time, never with a SQL JOIN.
//!
//! ```sql
//! countries(id, code_a2, code_a3, code_number, name_en, name_local)
//! states(id, country, code, name)
//! counties(id, state, name)
//! ```

use sqlx::{FromRow, PgPool};
use tracing::debug;

use crate::error::DatabaseError;

/// Repository for the geography reference tables
#[derive(Debug, Clone)]
pub struct GeographyRepository {
    pool: PgPool,
}

impl GeographyRepository {
    /// Creates a new GeographyRepository with the given connection pool
    ///
    /// # Arguments
    ///
    /// * `pool` - The PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves a county by its identifier
    ///
    /// # Returns
    ///
    /// The county row or NotFound error
    pub async fn get_county(&self, id: i32) -> Result<CountyRow, DatabaseError> {
        debug!(id, "Fetching county");

        sqlx::query_as::<_, CountyRow>(
            r#"
            SELECT id, state, name
            FROM counties
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("County", id))
    }

    /// Retrieves a state by its identifier
    ///
    /// # Returns
    ///
    /// The state row or NotFound error
    pub async fn get_state(&self, id: i32) -> Result<StateRow, DatabaseError> {
        debug!(id, "Fetching state");

        sqlx::query_as::<_, StateRow>(
            r#"
            SELECT id, country, code, name
            FROM states
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("State", id))
    }

    /// Retrieves a country by its identifier
    ///
    /// # Returns
    ///
    /// The country row or NotFound error
    pub async fn get_country(&self, id: i32) -> Result<CountryRow, DatabaseError> {
        debug!(id, "Fetching country");

        sqlx::query_as::<_, CountryRow>(
            r#"
            SELECT id, code_a2, code_a3, code_number, name_en, name_local
            FROM countries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Country", id))
    }

    /// Runs a trivial query to prove the pool can reach the server
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}

// ============================================================================
// Row types
// ============================================================================

/// Database row representation of a country
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CountryRow {
    pub id: i32,
    pub code_a2: String,
    pub code_a3: String,
    pub code_number: String,
    pub name_en: String,
    pub name_local: String,
}

/// Database row representation of a state
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct StateRow {
    pub id: i32,
    /// References `countries.id`
    pub country: i32,
    pub code: String,
    pub name: String,
}

/// Database row representation of a county
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CountyRow {
    pub id: i32,
    /// References `states.id`
    pub state: i32,
    pub name: String,
}
