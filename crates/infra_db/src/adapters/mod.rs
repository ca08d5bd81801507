//! Domain Adapters
//!
//! This module provides adapter implementations for domain ports,
//! connecting domain interfaces to the PostgreSQL database layer.
//!
//! Each adapter:
//! - Implements the domain's port trait
//! - Translates between database row types and domain models
//! - Uses the repository layer for database operations

pub mod geography;

pub use geography::PostgresGeographyAdapter;
