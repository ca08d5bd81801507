//! Infrastructure Database Layer
//!
//! This crate provides PostgreSQL access for the party domain using SQLx:
//! a connection pool builder, a repository over the geography tables, and
//! the adapter implementing `domain_party::GeographyPort`.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: repositories own the SQL and
//! return row types, adapters map rows onto domain records and database
//! errors onto `PortError`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PostgresGeographyAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/objects")).await?;
//! let adapter = PostgresGeographyAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, create_pool_from_url, DatabaseConfig};
pub use error::DatabaseError;
pub use repositories::GeographyRepository;
pub use adapters::PostgresGeographyAdapter;
