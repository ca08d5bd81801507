//! Core Kernel - Foundational types shared by the object crates
//!
//! This crate provides the building blocks used across the workspace:
//! - Strongly-typed identifiers for the geography reference tables
//! - The port/adapter infrastructure (errors, health checks, metadata)

pub mod identifiers;
pub mod ports;

pub use identifiers::{CountryId, StateId, CountyId};
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
    OperationMetadata,
};
