//! Command implementations
//!
//! Each command takes its collaborators as arguments so it can run against
//! the Postgres adapter in the binary and against the mock port in tests.

use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use core_kernel::{CountyId, HealthCheckResult, HealthCheckable};
use domain_party::{validate_document, AddressPatch, Dump, FullAddress, GeographyPort};

use crate::error::CliError;

/// Result of `objects document`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    /// `"CPF"` or `"CNPJ"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Normalized digits
    pub number: String,
    /// Display form, optionally with the type label
    pub formatted: String,
}

/// Resolves a county, merges the client fields, and returns the flat dump
#[instrument(skip_all, fields(county_id = %county_id))]
pub async fn county<P>(
    port: &P,
    county_id: CountyId,
    patch: AddressPatch,
) -> Result<Value, CliError>
where
    P: GeographyPort + ?Sized,
{
    let mut address = FullAddress::load(port, county_id).await?;
    address.set(patch);
    info!(location = %address.location.describe(), "Address resolved");
    Ok(address.dump_value())
}

/// Validates a raw CPF/CNPJ string
pub fn document(raw: &str, label: bool) -> Result<DocumentReport, CliError> {
    let document = validate_document(raw)?;
    Ok(DocumentReport {
        kind: document.kind.label().to_string(),
        formatted: document.format(label),
        number: document.number,
    })
}

/// Runs the adapter health check
pub async fn health<H>(adapter: &H) -> HealthCheckResult
where
    H: HealthCheckable + ?Sized,
{
    let result = adapter.health_check().await;
    info!(
        adapter = %result.adapter_id,
        status = ?result.status,
        latency_ms = result.latency_ms,
        "Health check finished"
    );
    result
}

/// Fails unless the health check says the adapter can serve requests
pub fn require_operational(result: &HealthCheckResult) -> Result<(), CliError> {
    if result.is_operational() {
        return Ok(());
    }
    Err(CliError::Unhealthy {
        adapter: result.adapter_id.clone(),
        status: format!("{:?}", result.status),
        message: result.message.clone().unwrap_or_default(),
    })
}
