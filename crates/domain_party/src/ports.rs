//! Party Domain Ports
//!
//! This module defines the port the address lookup reads geography rows
//! through, so the same lookup runs against PostgreSQL (infra_db) or the
//! in-memory mock used in tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_party::ports::GeographyPort;
//! use std::sync::Arc;
//!
//! let port: Arc<dyn GeographyPort> = Arc::new(PostgresGeographyAdapter::new(pool));
//! let county = port.get_county(CountyId::new(5), None).await?;
//! ```

use async_trait::async_trait;

use core_kernel::{
    CountryId, CountyId, DomainPort, HealthCheckable, OperationMetadata, PortError, StateId,
};

use crate::geography::{Country, CountyRecord, StateRecord};

/// Read-only access to the geography tables
///
/// Every method fetches exactly one row by primary key and returns
/// `PortError::NotFound` when there is none.
#[async_trait]
pub trait GeographyPort: DomainPort + HealthCheckable {
    /// Retrieves a county by ID
    async fn get_county(
        &self,
        id: CountyId,
        metadata: Option<OperationMetadata>,
    ) -> Result<CountyRecord, PortError>;

    /// Retrieves a state by ID
    async fn get_state(
        &self,
        id: StateId,
        metadata: Option<OperationMetadata>,
    ) -> Result<StateRecord, PortError>;

    /// Retrieves a country by ID
    async fn get_country(
        &self,
        id: CountryId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Country, PortError>;
}

/// Mock implementation for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use chrono::Utc;

    use core_kernel::{AdapterHealth, HealthCheckResult};

    /// In-memory mock implementation of GeographyPort
    #[derive(Debug, Default)]
    pub struct MockGeographyPort {
        countries: Arc<RwLock<HashMap<CountryId, Country>>>,
        states: Arc<RwLock<HashMap<StateId, StateRecord>>>,
        counties: Arc<RwLock<HashMap<CountyId, CountyRecord>>>,
        unavailable: AtomicBool,
        calls: AtomicUsize,
        /// 1-based call number from which fetches fail; 0 disables
        fail_from: AtomicUsize,
    }

    impl MockGeographyPort {
        /// Creates a new empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with rows for testing
        pub async fn with_records(
            countries: Vec<Country>,
            states: Vec<StateRecord>,
            counties: Vec<CountyRecord>,
        ) -> Self {
            let port = Self::new();
            for country in countries {
                port.insert_country(country).await;
            }
            for state in states {
                port.insert_state(state).await;
            }
            for county in counties {
                port.insert_county(county).await;
            }
            port
        }

        pub async fn insert_country(&self, country: Country) {
            self.countries.write().await.insert(country.id, country);
        }

        pub async fn insert_state(&self, state: StateRecord) {
            self.states.write().await.insert(state.id, state);
        }

        pub async fn insert_county(&self, county: CountyRecord) {
            self.counties.write().await.insert(county.id, county);
        }

        /// Makes every subsequent call fail as if the store were down
        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::SeqCst);
        }

        /// Lets the first `successes` fetches through, then drops the connection
        ///
        /// Simulates a store going down partway through a lookup.
        pub fn fail_after(&self, successes: usize) {
            self.fail_from.store(successes + 1, Ordering::SeqCst);
        }

        /// Number of row fetches served so far
        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn begin_call(&self) -> Result<(), PortError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(PortError::unavailable("mock-geography-port"));
            }
            let fail_from = self.fail_from.load(Ordering::SeqCst);
            if fail_from != 0 && call >= fail_from {
                return Err(PortError::connection("connection reset by peer"));
            }
            Ok(())
        }
    }

    impl DomainPort for MockGeographyPort {}

    #[async_trait]
    impl HealthCheckable for MockGeographyPort {
        async fn health_check(&self) -> HealthCheckResult {
            let down = self.unavailable.load(Ordering::SeqCst);
            HealthCheckResult {
                adapter_id: "mock-geography-port".to_string(),
                status: if down { AdapterHealth::Unhealthy } else { AdapterHealth::Healthy },
                latency_ms: 0,
                message: down.then(|| "Simulated outage".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl GeographyPort for MockGeographyPort {
        async fn get_county(
            &self,
            id: CountyId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<CountyRecord, PortError> {
            self.begin_call()?;
            self.counties
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("County", id))
        }

        async fn get_state(
            &self,
            id: StateId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<StateRecord, PortError> {
            self.begin_call()?;
            self.states
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("State", id))
        }

        async fn get_country(
            &self,
            id: CountryId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Country, PortError> {
            self.begin_call()?;
            self.countries
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Country", id))
        }
    }
}
