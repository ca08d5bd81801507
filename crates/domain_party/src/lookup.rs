//! Address lookup
//!
//! Resolves a county id into its full county → state → country chain with
//! three dependent point reads. The reads run one after the other; there is
//! no transaction, cache or retry.

use tracing::{debug, instrument, warn};

use core_kernel::{CountyId, OperationMetadata};

use crate::error::PartyError;
use crate::geography::AddressLookup;
use crate::ports::GeographyPort;

/// Looks up the county, its state and that state's country
///
/// # Arguments
///
/// * `port` - Where the geography rows are read from
/// * `county_id` - An index in the counties table
/// * `metadata` - Optional operation metadata, forwarded to every read
///
/// # Errors
///
/// * `CountyNotFound` - no county with `county_id`
/// * `StateNotFound` - the county points at a missing state
/// * `CountryNotFound` - the state points at a missing country
/// * `StoreUnavailable` - any other port failure
#[instrument(skip_all, fields(county_id = %county_id))]
pub async fn lookup_address<P>(
    port: &P,
    county_id: CountyId,
    metadata: Option<OperationMetadata>,
) -> Result<AddressLookup, PartyError>
where
    P: GeographyPort + ?Sized,
{
    let county = port
        .get_county(county_id, metadata.clone())
        .await
        .map_err(|e| step_failed(e, PartyError::CountyNotFound(county_id)))?;
    debug!(state_id = %county.state_id, "county resolved");

    let state_id = county.state_id;
    let state = port
        .get_state(state_id, metadata.clone())
        .await
        .map_err(|e| step_failed(e, PartyError::StateNotFound(state_id)))?;
    debug!(country_id = %state.country_id, "state resolved");

    let country_id = state.country_id;
    let country = port
        .get_country(country_id, metadata)
        .await
        .map_err(|e| step_failed(e, PartyError::CountryNotFound(country_id)))?;
    debug!(country = %country.code_a2, "country resolved");

    Ok(AddressLookup {
        country,
        state: state.into(),
        county: county.into(),
    })
}

fn step_failed(error: core_kernel::PortError, not_found: PartyError) -> PartyError {
    let error = PartyError::from_port(error, not_found);
    warn!(%error, "address lookup failed");
    error
}
