//! Comprehensive tests for domain_party

use serde_json::json;

use core_kernel::{CountryId, CountyId, StateId};

use domain_party::address::Address;
use domain_party::document::{validate_document, Document, DocumentType};
use domain_party::dump::Dump;
use domain_party::full_address::{AddressPatch, FullAddress, LocalDetails};
use domain_party::geography::{AddressLookup, Country, County, CountyRecord, State, StateRecord};
use domain_party::person::{Person, PersonAddress};
use domain_party::PartyError;

fn springfield() -> AddressLookup {
    AddressLookup {
        country: Country {
            id: CountryId::new(1),
            code_a2: "US".to_string(),
            code_a3: "USA".to_string(),
            code_number: "840".to_string(),
            name_en: "United States".to_string(),
            name_local: "United States".to_string(),
        },
        state: State {
            id: StateId::new(2),
            code: "IL".to_string(),
            name: "Illinois".to_string(),
        },
        county: County {
            id: CountyId::new(5),
            name: "Springfield".to_string(),
        },
    }
}

// ============================================================================
// Document Tests
// ============================================================================

mod document_tests {
    use super::*;

    #[test]
    fn test_cpf_is_tried_first() {
        let doc = validate_document("529.982.247-25").unwrap();
        assert_eq!(doc.kind, DocumentType::Cpf);
        assert_eq!(doc.number, "52998224725");
    }

    #[test]
    fn test_falls_back_to_cnpj() {
        let doc = validate_document("04.252.011/0001-10").unwrap();
        assert_eq!(doc.kind, DocumentType::Cnpj);
        assert_eq!(doc.number, "04252011000110");
    }

    #[test]
    fn test_formatting_characters_are_ignored() {
        let doc: Document = " 529 982 247 / 25 ".parse().unwrap();
        assert_eq!(doc.number, "52998224725");
    }

    #[test]
    fn test_invalid_documents() {
        for raw in ["", "abc", "12345", "529.982.247-24", "11.222.333/0001-80", "11111111111"] {
            assert!(
                matches!(validate_document(raw), Err(PartyError::InvalidDocument)),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_is_formatted_without_label() {
        let doc = validate_document("33000167000101").unwrap();
        assert_eq!(doc.to_string(), "33.000.167/0001-01");
    }
}

// ============================================================================
// Person Tests
// ============================================================================

mod person_tests {
    use super::*;

    #[test]
    fn test_person_new() {
        let person = Person::new("Maria da Silva", "52998224725").unwrap();
        assert_eq!(person.name, "Maria da Silva");
        assert_eq!(person.document.kind, DocumentType::Cpf);
        assert!(person.addresses.is_empty());
    }

    #[test]
    fn test_person_format_document() {
        let person = Person::new("Acme", "11222333000181").unwrap();
        assert_eq!(person.format_document(false), "11.222.333/0001-81");
        assert_eq!(person.format_document(true), "CNPJ: 11.222.333/0001-81");
    }

    #[test]
    fn test_person_static_validation() {
        let doc = Person::validate_document("111.444.777-35").unwrap();
        assert_eq!(doc.number, "11144477735");
    }

    #[test]
    fn test_person_holds_both_address_shapes() {
        let mut person = Person::new("Maria", "52998224725").unwrap();
        person.add_address(Address::new("Rua A", "10", "01000-000", "Centro", "São Paulo", "SP", "Brasil"));
        person.add_address(FullAddress::from_lookup(springfield()));

        assert_eq!(person.addresses.len(), 2);
        assert!(matches!(person.addresses[0], PersonAddress::Flat(_)));
        assert!(matches!(person.addresses[1], PersonAddress::Full(_)));
    }

    #[test]
    fn test_person_dump_nests_addresses() {
        let person = Person::new("Maria", "52998224725")
            .unwrap()
            .with_address(FullAddress::from_lookup(springfield()));

        let dump = person.dump();
        let keys: Vec<_> = dump.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "document", "addresses"]);
        assert_eq!(dump["addresses"][0]["county"]["name"], "Springfield");
    }

    #[test]
    fn test_person_serde_roundtrip() {
        let person = Person::new("Maria", "52998224725")
            .unwrap()
            .with_address(Address::new("Rua A", "10", "01000-000", "Centro", "São Paulo", "SP", "Brasil"));

        let json = serde_json::to_string(&person).unwrap();
        let back: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(back, person);
    }
}

// ============================================================================
// Address Tests
// ============================================================================

mod address_tests {
    use super::*;

    #[test]
    fn test_flat_address_keeps_county_in_county() {
        let address = Address::new("Main Street", "742", "62704", "Evergreen", "Springfield", "IL", "US");
        assert_eq!(address.county, "Springfield");
        assert_eq!(address.neighborhood, "Evergreen");
    }

    #[test]
    fn test_flat_address_detail() {
        let address = Address::new("Main Street", "742", "62704", "Evergreen", "Springfield", "IL", "US")
            .with_detail("Back door");
        assert_eq!(address.dump()["detail"], "Back door");
    }

    #[test]
    fn test_records_drop_references() {
        let state: State = StateRecord {
            id: StateId::new(2),
            country_id: CountryId::new(1),
            code: "IL".to_string(),
            name: "Illinois".to_string(),
        }
        .into();
        let county: County = CountyRecord {
            id: CountyId::new(5),
            state_id: StateId::new(2),
            name: "Springfield".to_string(),
        }
        .into();

        assert_eq!(state.id, StateId::new(2));
        assert_eq!(county.id, CountyId::new(5));
        assert!(!state.dump().contains_key("country"));
        assert!(!county.dump().contains_key("state"));
    }

    #[test]
    fn test_lookup_dump() {
        let dump = springfield().dump();
        assert_eq!(
            serde_json::Value::Object(dump),
            json!({
                "country": {
                    "id": 1,
                    "code_a2": "US",
                    "code_a3": "USA",
                    "code_number": "840",
                    "name_en": "United States",
                    "name_local": "United States"
                },
                "state": {"id": 2, "code": "IL", "name": "Illinois"},
                "county": {"id": 5, "name": "Springfield"}
            })
        );
    }

    #[test]
    fn test_lookup_describe() {
        assert_eq!(springfield().describe(), "Springfield, IL, United States");
    }

    #[test]
    fn test_full_address_merge_adds_zipcode() {
        let mut address = FullAddress::from_lookup(springfield());
        address.set(AddressPatch::new().zipcode("00000"));

        let dump = address.dump();
        assert_eq!(dump["zipcode"], "00000");
        assert_eq!(dump["county"]["id"], 5);
        assert_eq!(dump["state"]["id"], 2);
        assert_eq!(dump["country"]["id"], 1);
        assert_eq!(dump.len(), 4);
    }

    #[test]
    fn test_full_address_merge_overwrites_same_key() {
        let mut address = FullAddress::from_lookup(springfield());
        address
            .set(AddressPatch::new().zipcode("11111").place("Main Street"))
            .set(AddressPatch::new().zipcode("22222"));

        assert_eq!(address.details.zipcode.as_deref(), Some("22222"));
        assert_eq!(address.details.place.as_deref(), Some("Main Street"));
    }

    #[test]
    fn test_full_address_dump_orders_base_first() {
        let mut address = FullAddress::from_lookup(springfield());
        address.details = LocalDetails {
            neighborhood: Some("Evergreen".to_string()),
            place: Some("Terrace".to_string()),
            number: Some("742".to_string()),
            zipcode: Some("62704".to_string()),
            detail: Some(String::new()),
        };

        let dump = address.dump();
        let keys: Vec<_> = dump.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["country", "state", "county", "neighborhood", "place", "number", "zipcode", "detail"]
        );
    }

    #[test]
    fn test_full_address_format() {
        let mut address = FullAddress::from_lookup(springfield());
        address.set(
            AddressPatch::new()
                .place("Evergreen Terrace")
                .number("742")
                .zipcode("62704"),
        );
        assert_eq!(
            address.format(),
            "Evergreen Terrace, 742\nSpringfield - IL\n62704\nUnited States"
        );
    }
}
