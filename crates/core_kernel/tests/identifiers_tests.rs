//! Unit tests for the identifier newtypes
//!
//! Tests cover creation, parsing, conversion, and display formatting.

use core_kernel::{CountryId, CountyId, StateId};

mod county_id_tests {
    use super::*;

    #[test]
    fn test_new_and_value() {
        let id = CountyId::new(5);
        assert_eq!(id.value(), 5);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(CountyId::prefix(), "CNTY");
    }

    #[test]
    fn test_display_format() {
        assert_eq!(CountyId::new(5).to_string(), "CNTY-5");
    }

    #[test]
    fn test_from_str_with_prefix() {
        let parsed: CountyId = "CNTY-17".parse().unwrap();
        assert_eq!(parsed, CountyId::new(17));
    }

    #[test]
    fn test_from_str_without_prefix() {
        let parsed: CountyId = " 17 ".parse().unwrap();
        assert_eq!(parsed, CountyId::new(17));
    }

    #[test]
    fn test_from_str_rejects_foreign_prefix() {
        assert!("ST-17".parse::<CountyId>().is_err());
        assert!("abc".parse::<CountyId>().is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(CountyId::new(1) < CountyId::new(2));
    }
}

mod state_id_tests {
    use super::*;

    #[test]
    fn test_display_format() {
        assert_eq!(StateId::new(2).to_string(), "ST-2");
    }

    #[test]
    fn test_roundtrip() {
        let original = StateId::new(27);
        let parsed: StateId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }
}

mod country_id_tests {
    use super::*;

    #[test]
    fn test_display_format() {
        assert_eq!(CountryId::new(1).to_string(), "CTRY-1");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&CountryId::new(76)).unwrap();
        assert_eq!(json, "76");
        let back: CountryId = serde_json::from_str("76").unwrap();
        assert_eq!(back, CountryId::new(76));
    }
}
