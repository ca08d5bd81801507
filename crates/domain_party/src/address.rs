//! Address types

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::dump::{Dump, DumpMap};

/// A postal address held entirely as caller-supplied strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Road, avenue, ...
    pub street: String,
    /// Building number; an apartment goes into `detail`
    pub number: String,
    /// Additional information
    pub detail: String,
    /// Format varies from country to country
    pub zipcode: String,
    /// A county's small division
    pub neighborhood: String,
    /// The city
    pub county: String,
    pub state: String,
    pub country: String,
}

impl Address {
    /// Creates a new address with an empty `detail`
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        zipcode: impl Into<String>,
        neighborhood: impl Into<String>,
        county: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            number: number.into(),
            detail: String::new(),
            zipcode: zipcode.into(),
            neighborhood: neighborhood.into(),
            county: county.into(),
            state: state.into(),
            country: country.into(),
        }
    }

    /// Sets the optional detail
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Formats address for display
    pub fn format(&self) -> String {
        format_lines(
            &self.street,
            &self.number,
            &self.detail,
            &self.neighborhood,
            &join_non_empty(&[&self.county, &self.state], " - "),
            &self.zipcode,
            &self.country,
        )
    }
}

impl Dump for Address {
    fn dump(&self) -> DumpMap {
        let mut map = DumpMap::new();
        map.insert("street".into(), json!(self.street));
        map.insert("number".into(), json!(self.number));
        map.insert("detail".into(), json!(self.detail));
        map.insert("zipcode".into(), json!(self.zipcode));
        map.insert("neighborhood".into(), json!(self.neighborhood));
        map.insert("county".into(), json!(self.county));
        map.insert("state".into(), json!(self.state));
        map.insert("country".into(), json!(self.country));
        map
    }
}

/// Joins the parts that are not blank with `separator`
pub(crate) fn join_non_empty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Joins the address parts into display lines, skipping empty ones
pub(crate) fn format_lines(
    place: &str,
    number: &str,
    detail: &str,
    neighborhood: &str,
    locality: &str,
    zipcode: &str,
    country: &str,
) -> String {
    let street = join_non_empty(&[place, number], ", ");
    let first = join_non_empty(&[&street, detail], " - ");

    join_non_empty(&[&first, neighborhood, locality, zipcode, country], "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Address {
        Address::new(
            "Main Street",
            "742",
            "62704",
            "Evergreen Terrace",
            "Springfield",
            "IL",
            "United States",
        )
    }

    #[test]
    fn test_new_copies_every_field() {
        let address = sample();
        assert_eq!(address.street, "Main Street");
        assert_eq!(address.number, "742");
        assert_eq!(address.zipcode, "62704");
        assert_eq!(address.neighborhood, "Evergreen Terrace");
        assert_eq!(address.county, "Springfield");
        assert_eq!(address.state, "IL");
        assert_eq!(address.country, "United States");
        assert_eq!(address.detail, "");
    }

    #[test]
    fn test_format() {
        let address = sample().with_detail("Apt 2");
        assert_eq!(
            address.format(),
            "Main Street, 742 - Apt 2\nEvergreen Terrace\nSpringfield - IL\n62704\nUnited States"
        );
    }

    #[test]
    fn test_format_without_street_name() {
        let mut address = sample();
        address.street = String::new();
        address.neighborhood = String::new();

        assert_eq!(
            address.format(),
            "742\nSpringfield - IL\n62704\nUnited States"
        );
    }

    #[test]
    fn test_format_skips_missing_locality_parts() {
        let address = Address::new("", "", "", "", "", "IL", "United States").with_detail("Lot 9");
        assert_eq!(address.format(), "Lot 9\nIL\nUnited States");
    }

    #[test]
    fn test_dump_keys() {
        let dump = sample().dump();
        let keys: Vec<_> = dump.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["street", "number", "detail", "zipcode", "neighborhood", "county", "state", "country"]
        );
        assert_eq!(dump["county"], "Springfield");
    }
}
