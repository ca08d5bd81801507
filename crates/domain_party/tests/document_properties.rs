//! Property tests for document validation and formatting

use proptest::prelude::*;

use domain_party::checksum::{cnpj, cpf, normalize};
use domain_party::document::{validate_document, DocumentType};
use test_utils::generators::{valid_cnpj_strategy as valid_cnpj, valid_cpf_strategy as valid_cpf};

proptest! {
    #[test]
    fn valid_cpfs_are_typed_cpf(number in valid_cpf()) {
        let doc = validate_document(&number).unwrap();
        prop_assert_eq!(doc.kind, DocumentType::Cpf);
        prop_assert_eq!(doc.number, number);
    }

    #[test]
    fn valid_cnpjs_are_typed_cnpj(number in valid_cnpj()) {
        let doc = validate_document(&number).unwrap();
        prop_assert_eq!(doc.kind, DocumentType::Cnpj);
        prop_assert_eq!(doc.number, number);
    }

    #[test]
    fn wrong_lengths_are_rejected(number in "[0-9]{1,10}|[0-9]{12,13}|[0-9]{15,20}") {
        prop_assert!(validate_document(&number).is_err());
    }

    #[test]
    fn corrupted_cpf_check_digit_is_rejected(number in valid_cpf(), bump in 1u32..10) {
        let last = number.chars().last().unwrap().to_digit(10).unwrap();
        let corrupted = format!("{}{}", &number[..10], (last + bump) % 10);
        prop_assert!(cpf::validate(&corrupted).is_none());
    }

    #[test]
    fn cpf_format_roundtrips(number in valid_cpf()) {
        let doc = validate_document(&number).unwrap();
        let formatted = doc.format(true);
        let again = validate_document(&normalize(&formatted)).unwrap();
        prop_assert_eq!(again, doc);
    }

    #[test]
    fn cnpj_format_roundtrips(number in valid_cnpj()) {
        let formatted = cnpj::format(&number);
        prop_assert_eq!(formatted.len(), 18);
        prop_assert_eq!(cnpj::validate(&formatted), Some(number));
    }
}
