//! Party domain errors
//!
//! This module defines the error types that can occur in the party domain:
//! document validation failures and the failure modes of the address lookup.

use thiserror::Error;

use core_kernel::{CountryId, CountyId, PortError, StateId};

/// Errors that can occur in the party domain
#[derive(Debug, Error)]
pub enum PartyError {
    /// The document is neither a valid CPF nor a valid CNPJ
    #[error("Not a valid document")]
    InvalidDocument,

    /// No county row with the given id
    #[error("County not found: {0}")]
    CountyNotFound(CountyId),

    /// The county references a state that does not exist
    #[error("State not found: {0}")]
    StateNotFound(StateId),

    /// The state references a country that does not exist
    #[error("Country not found: {0}")]
    CountryNotFound(CountryId),

    /// The geography store could not answer
    #[error("Geography store unavailable: {0}")]
    StoreUnavailable(String),
}

impl PartyError {
    /// Creates a StoreUnavailable error from any displayable cause
    pub fn store_unavailable(cause: impl std::fmt::Display) -> Self {
        PartyError::StoreUnavailable(cause.to_string())
    }

    /// Maps a port failure for one lookup step
    ///
    /// `NotFound` becomes the step-specific error, everything else means the
    /// store could not be queried.
    pub fn from_port(error: PortError, not_found: PartyError) -> Self {
        if error.is_not_found() {
            not_found
        } else {
            PartyError::store_unavailable(error)
        }
    }

    /// Checks if this error means a geography row is missing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PartyError::CountyNotFound(_)
                | PartyError::StateNotFound(_)
                | PartyError::CountryNotFound(_)
        )
    }
}
