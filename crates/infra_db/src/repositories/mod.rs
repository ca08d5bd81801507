//! Repository implementations
//!
//! Repositories encapsulate SQL queries and return plain row types; the
//! adapters map those rows onto domain types.

pub mod geography;

pub use geography::{CountryRow, CountyRow, GeographyRepository, StateRow};
