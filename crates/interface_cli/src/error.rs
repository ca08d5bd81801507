//! CLI error handling

use thiserror::Error;

use domain_party::PartyError;
use infra_db::DatabaseError;

/// Exit code for any error without a more specific mapping
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for a document or id the user got wrong
pub const EXIT_INVALID_INPUT: i32 = 2;
/// Exit code for a missing geography row
pub const EXIT_NOT_FOUND: i32 = 3;
/// Exit code for a store or configuration failure
pub const EXIT_UNAVAILABLE: i32 = 4;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Party(#[from] PartyError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Adapter {adapter} is {status}: {message}")]
    Unhealthy {
        adapter: String,
        status: String,
        message: String,
    },
}

impl CliError {
    /// Maps the error onto a process exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Party(PartyError::InvalidDocument) => EXIT_INVALID_INPUT,
            CliError::Party(e) if e.is_not_found() => EXIT_NOT_FOUND,
            CliError::Party(_)
            | CliError::Database(_)
            | CliError::Config(_)
            | CliError::Serialization(_)
            | CliError::Unhealthy { .. } => EXIT_UNAVAILABLE,
        }
    }
}

/// Exit code for an error bubbled up to `main`
///
/// Context layers are looked through; errors that carry no `CliError`
/// get `EXIT_FAILURE`.
pub fn exit_code_of(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<CliError>()
        .map(CliError::exit_code)
        .unwrap_or(EXIT_FAILURE)
}
