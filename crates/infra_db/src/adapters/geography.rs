//! PostgreSQL Geography Adapter
//!
//! This module provides the internal (database) adapter for the party domain's
//! `GeographyPort`, backed by the `GeographyRepository`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresGeographyAdapter;
//! use domain_party::{lookup_address, GeographyPort};
//! use std::sync::Arc;
//!
//! let port: Arc<dyn GeographyPort> = Arc::new(PostgresGeographyAdapter::new(pool));
//! let lookup = lookup_address(port.as_ref(), CountyId::new(5), None).await?;
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, CountryId, CountyId, DomainPort, HealthCheckResult, HealthCheckable,
    OperationMetadata, PortError, StateId,
};
use domain_party::{Country, CountyRecord, GeographyPort, StateRecord};

use crate::repositories::geography::{CountryRow, CountyRow, GeographyRepository, StateRow};

const ADAPTER_ID: &str = "postgres-geography-adapter";

/// PostgreSQL-backed implementation of the GeographyPort trait
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants:
/// - `DatabaseError::NotFound` -> `PortError::NotFound`
/// - connection problems -> `PortError::Connection`
/// - other errors -> `PortError::Internal`
#[derive(Debug, Clone)]
pub struct PostgresGeographyAdapter {
    repository: GeographyRepository,
}

impl PostgresGeographyAdapter {
    /// Creates a new PostgreSQL geography adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: GeographyRepository::new(pool),
        }
    }

    /// Returns a reference to the underlying repository
    pub fn repository(&self) -> &GeographyRepository {
        &self.repository
    }
}

impl DomainPort for PostgresGeographyAdapter {}

#[async_trait]
impl HealthCheckable for PostgresGeographyAdapter {
    /// Performs a `SELECT 1` to verify the pool is operational
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();
        let result = self.repository.ping().await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(()) => HealthCheckResult {
                adapter_id: ADAPTER_ID.to_string(),
                status: AdapterHealth::Healthy,
                latency_ms,
                message: None,
                checked_at: Utc::now(),
            },
            Err(e) => HealthCheckResult {
                adapter_id: ADAPTER_ID.to_string(),
                status: AdapterHealth::Unhealthy,
                latency_ms,
                message: Some(format!("Database error: {}", e)),
                checked_at: Utc::now(),
            },
        }
    }
}

#[async_trait]
impl GeographyPort for PostgresGeographyAdapter {
    #[instrument(skip(self, _metadata), fields(county_id = %id))]
    async fn get_county(
        &self,
        id: CountyId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<CountyRecord, PortError> {
        let row = self.repository.get_county(id.value()).await?;
        debug!("County row fetched");
        Ok(county_from_row(row))
    }

    #[instrument(skip(self, _metadata), fields(state_id = %id))]
    async fn get_state(
        &self,
        id: StateId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<StateRecord, PortError> {
        let row = self.repository.get_state(id.value()).await?;
        debug!("State row fetched");
        Ok(state_from_row(row))
    }

    #[instrument(skip(self, _metadata), fields(country_id = %id))]
    async fn get_country(
        &self,
        id: CountryId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Country, PortError> {
        let row = self.repository.get_country(id.value()).await?;
        debug!("Country row fetched");
        Ok(country_from_row(row))
    }
}

// ============================================================================
// Row conversions
// ============================================================================

fn county_from_row(row: CountyRow) -> CountyRecord {
    CountyRecord {
        id: CountyId::new(row.id),
        state_id: StateId::new(row.state),
        name: row.name,
    }
}

fn state_from_row(row: StateRow) -> StateRecord {
    StateRecord {
        id: StateId::new(row.id),
        country_id: CountryId::new(row.country),
        code: row.code,
        name: row.name,
    }
}

fn country_from_row(row: CountryRow) -> Country {
    Country {
        id: CountryId::new(row.id),
        code_a2: row.code_a2,
        code_a3: row.code_a3,
        code_number: row.code_number,
        name_en: row.name_en,
        name_local: row.name_local,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_county_conversion_keeps_reference() {
        let record = county_from_row(CountyRow {
            id: 5,
            state: 2,
            name: "Springfield".to_string(),
        });
        assert_eq!(record.id, CountyId::new(5));
        assert_eq!(record.state_id, StateId::new(2));
        assert_eq!(record.name, "Springfield");
    }

    #[test]
    fn test_state_conversion_keeps_reference() {
        let record = state_from_row(StateRow {
            id: 2,
            country: 1,
            code: "IL".to_string(),
            name: "Illinois".to_string(),
        });
        assert_eq!(record.id, StateId::new(2));
        assert_eq!(record.country_id, CountryId::new(1));
    }

    #[test]
    fn test_country_conversion() {
        let country = country_from_row(CountryRow {
            id: 76,
            code_a2: "BR".to_string(),
            code_a3: "BRA".to_string(),
            code_number: "076".to_string(),
            name_en: "Brazil".to_string(),
            name_local: "Brasil".to_string(),
        });
        assert_eq!(country.id, CountryId::new(76));
        assert_eq!(country.code_number, "076");
        assert_eq!(country.name_local, "Brasil");
    }

    #[tokio::test]
    async fn test_health_check_reports_unreachable_database() {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_millis(200))
            .connect_lazy("postgres://nobody@127.0.0.1:1/none")
            .unwrap();
        let adapter = PostgresGeographyAdapter::new(pool);

        let health = adapter.health_check().await;
        assert_eq!(health.status, AdapterHealth::Unhealthy);
        assert_eq!(health.adapter_id, ADAPTER_ID);
        assert!(health.message.is_some());
    }
}
