//! Full addresses
//!
//! A `FullAddress` pairs the county/state/country resolved from the
//! geography tables with the local detail only a client can provide
//! (neighborhood, place, number, zipcode, detail).

use serde::{Deserialize, Serialize};
use serde_json::json;

use core_kernel::CountyId;

use crate::address::{format_lines, join_non_empty};
use crate::dump::{flatten, Dump, DumpMap};
use crate::error::PartyError;
use crate::geography::AddressLookup;
use crate::lookup::lookup_address;
use crate::ports::GeographyPort;

/// Client-supplied address fields not present in the geography tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalDetails {
    /// A county's small division
    pub neighborhood: Option<String>,
    /// Road, avenue, ...
    pub place: Option<String>,
    /// Building number; may be something like `"13-A"` or `"s/n"`
    pub number: Option<String>,
    /// Used by mailing to locate a place
    pub zipcode: Option<String>,
    /// Additional and complementary information
    pub detail: Option<String>,
}

impl LocalDetails {
    /// Merges a patch; set fields overwrite, unset fields leave the value alone
    pub fn apply(&mut self, patch: AddressPatch) {
        let AddressPatch { neighborhood, place, number, zipcode, detail } = patch;
        if neighborhood.is_some() {
            self.neighborhood = neighborhood;
        }
        if place.is_some() {
            self.place = place;
        }
        if number.is_some() {
            self.number = number;
        }
        if zipcode.is_some() {
            self.zipcode = zipcode;
        }
        if detail.is_some() {
            self.detail = detail;
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Dump for LocalDetails {
    fn dump(&self) -> DumpMap {
        let fields = [
            ("neighborhood", &self.neighborhood),
            ("place", &self.place),
            ("number", &self.number),
            ("zipcode", &self.zipcode),
            ("detail", &self.detail),
        ];

        let mut map = DumpMap::new();
        for (key, value) in fields {
            if let Some(value) = value {
                map.insert(key.into(), json!(value));
            }
        }
        map
    }
}

/// A partial update of [`LocalDetails`]
///
/// # Example
///
/// ```rust
/// use domain_party::full_address::{AddressPatch, LocalDetails};
///
/// let mut details = LocalDetails::default();
/// details.apply(AddressPatch::new().zipcode("00000"));
/// assert_eq!(details.zipcode.as_deref(), Some("00000"));
/// assert!(details.place.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPatch {
    pub neighborhood: Option<String>,
    pub place: Option<String>,
    pub number: Option<String>,
    pub zipcode: Option<String>,
    pub detail: Option<String>,
}

impl AddressPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn neighborhood(mut self, value: impl Into<String>) -> Self {
        self.neighborhood = Some(value.into());
        self
    }

    pub fn place(mut self, value: impl Into<String>) -> Self {
        self.place = Some(value.into());
        self
    }

    pub fn number(mut self, value: impl Into<String>) -> Self {
        self.number = Some(value.into());
        self
    }

    pub fn zipcode(mut self, value: impl Into<String>) -> Self {
        self.zipcode = Some(value.into());
        self
    }

    pub fn detail(mut self, value: impl Into<String>) -> Self {
        self.detail = Some(value.into());
        self
    }
}

/// An address referencing a specific place in the world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullAddress {
    /// County, state and country as stored in the geography tables
    pub location: AddressLookup,
    /// What the client told us
    pub details: LocalDetails,
}

impl FullAddress {
    /// Wraps an already resolved lookup, with no local details yet
    pub fn from_lookup(location: AddressLookup) -> Self {
        Self {
            location,
            details: LocalDetails::default(),
        }
    }

    /// Resolves `county_id` and returns an address without local details
    pub async fn load<P>(port: &P, county_id: CountyId) -> Result<Self, PartyError>
    where
        P: GeographyPort + ?Sized,
    {
        let location = lookup_address(port, county_id, None).await?;
        Ok(Self::from_lookup(location))
    }

    /// Resolves `county_id` and fills every local field
    ///
    /// # Arguments
    ///
    /// * `port` - Where the geography rows are read from
    /// * `county_id` - An index in the counties table
    /// * `detail` - Optional information, may be empty
    pub async fn new<P>(
        port: &P,
        county_id: CountyId,
        neighborhood: impl Into<String>,
        place: impl Into<String>,
        number: impl Into<String>,
        zipcode: impl Into<String>,
        detail: impl Into<String>,
    ) -> Result<Self, PartyError>
    where
        P: GeographyPort + ?Sized,
    {
        let mut address = Self::load(port, county_id).await?;
        address.set(
            AddressPatch::new()
                .neighborhood(neighborhood)
                .place(place)
                .number(number)
                .zipcode(zipcode)
                .detail(detail),
        );
        Ok(address)
    }

    /// Merges client-supplied fields into the stored details
    pub fn set(&mut self, patch: AddressPatch) -> &mut Self {
        self.details.apply(patch);
        self
    }

    /// Formats address for display
    pub fn format(&self) -> String {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        format_lines(
            &text(&self.details.place),
            &text(&self.details.number),
            &text(&self.details.detail),
            &text(&self.details.neighborhood),
            &join_non_empty(&[&self.location.county.name, &self.location.state.code], " - "),
            &text(&self.details.zipcode),
            &self.location.country.name_en,
        )
    }
}

impl Dump for FullAddress {
    /// Lookup records first, then whichever local fields are set
    fn dump(&self) -> DumpMap {
        flatten([self.location.dump(), self.details.dump()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overwrites_only_set_fields() {
        let mut details = LocalDetails {
            place: Some("Main Street".to_string()),
            zipcode: Some("62704".to_string()),
            ..Default::default()
        };

        details.apply(AddressPatch::new().zipcode("00000").number("742"));

        assert_eq!(details.place.as_deref(), Some("Main Street"));
        assert_eq!(details.zipcode.as_deref(), Some("00000"));
        assert_eq!(details.number.as_deref(), Some("742"));
        assert!(details.detail.is_none());
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut details = LocalDetails::default();
        details.apply(AddressPatch::new());
        assert!(details.is_empty());
    }

    #[test]
    fn test_local_dump_skips_unset() {
        let details = LocalDetails {
            zipcode: Some("00000".to_string()),
            ..Default::default()
        };
        let dump = details.dump();
        assert_eq!(dump.len(), 1);
        assert_eq!(dump["zipcode"], "00000");
    }
}
