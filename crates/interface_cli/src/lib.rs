//! Command Line Layer
//!
//! This crate backs the `objects` binary: configuration loading, command
//! implementations, and the mapping of domain errors onto exit codes.
//!
//! # Architecture
//!
//! - **Config**: `OBJECTS_*` environment settings
//! - **Commands**: county lookup, document validation, health check
//! - **Error Handling**: one error type with stable exit codes
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{commands, config::CliConfig};
//!
//! let config = CliConfig::from_env()?;
//! let pool = infra_db::create_pool(config.database_config()).await?;
//! let adapter = infra_db::PostgresGeographyAdapter::new(pool);
//! let dump = commands::county(&adapter, CountyId::new(5), AddressPatch::new()).await?;
//! ```

pub mod commands;
pub mod config;
pub mod error;

pub use config::CliConfig;
pub use error::CliError;
