//! Strongly-typed identifiers for reference data
//!
//! Rows in the geography tables are keyed by integer columns. Wrapping those
//! integers in newtypes keeps a county id from being passed where a state id
//! is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates from a raw key value
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Returns the underlying key value
            pub const fn value(&self) -> i32 {
                self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let raw = s.trim();
                let raw = raw.strip_prefix(concat!($prefix, "-")).unwrap_or(raw);
                Ok(Self(raw.parse()?))
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> i32 {
                id.0
            }
        }
    };
}

// Geography identifiers
define_id!(CountryId, "CTRY");
define_id!(StateId, "ST");
define_id!(CountyId, "CNTY");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_county_id_display() {
        let id = CountyId::new(5);
        assert_eq!(id.to_string(), "CNTY-5");
    }

    #[test]
    fn test_id_parsing() {
        let original = StateId::new(42);
        let parsed: StateId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_int_conversion() {
        let id = CountryId::from(76);
        let back: i32 = id.into();
        assert_eq!(back, 76);
    }
}
