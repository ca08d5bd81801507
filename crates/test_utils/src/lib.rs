//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and generators for the
//! objects test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built geography rows, a seeded mock port, sample documents
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod generators;

pub use fixtures::*;
pub use generators::*;
