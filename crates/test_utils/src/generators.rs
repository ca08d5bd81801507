//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::CountyId;
use proptest::prelude::*;

const CPF_FIRST: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const CPF_SECOND: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        rem if rem < 2 => 0,
        rem => 11 - rem,
    }
}

fn digits_to_string(digits: &[u32]) -> String {
    digits
        .iter()
        .filter_map(|d| char::from_digit(*d, 10))
        .collect()
}

fn with_check_digits(mut digits: Vec<u32>, first: &[u32], second: &[u32]) -> String {
    let dv1 = check_digit(&digits, first);
    digits.push(dv1);
    let dv2 = check_digit(&digits, second);
    digits.push(dv2);
    digits_to_string(&digits)
}

fn base_digits(len: usize) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..10, len)
        .prop_filter("repeated digits", |d| d.iter().any(|x| *x != d[0]))
}

/// Strategy for generating valid CPF digit strings
pub fn valid_cpf_strategy() -> impl Strategy<Value = String> {
    base_digits(9).prop_map(|d| with_check_digits(d, &CPF_FIRST, &CPF_SECOND))
}

/// Strategy for generating valid CNPJ digit strings
pub fn valid_cnpj_strategy() -> impl Strategy<Value = String> {
    base_digits(12).prop_map(|d| with_check_digits(d, &CNPJ_FIRST, &CNPJ_SECOND))
}

/// Strategy for generating either document kind
pub fn valid_document_strategy() -> impl Strategy<Value = String> {
    prop_oneof![valid_cpf_strategy(), valid_cnpj_strategy()]
}

/// Strategy for sprinkling punctuation and spaces between digits
///
/// Validation ignores every non-digit, so the result must validate to the
/// same number as the input.
pub fn noisy_strategy(digits: String) -> impl Strategy<Value = String> {
    let len = digits.len();
    prop::collection::vec(prop_oneof![Just(""), Just("."), Just("-"), Just("/"), Just(" ")], len)
        .prop_map(move |noise| {
            digits
                .chars()
                .zip(noise)
                .map(|(c, n)| format!("{c}{n}"))
                .collect()
        })
}

/// Strategy for generating county ids outside the fixture range
pub fn unknown_county_id_strategy() -> impl Strategy<Value = CountyId> {
    (10_000_000i32..i32::MAX).prop_map(CountyId::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digit_matches_known_cpf() {
        let base = [5, 2, 9, 9, 8, 2, 2, 4, 7].to_vec();
        assert_eq!(with_check_digits(base, &CPF_FIRST, &CPF_SECOND), "52998224725");
    }

    #[test]
    fn test_check_digit_matches_known_cnpj() {
        let base = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1].to_vec();
        assert_eq!(with_check_digits(base, &CNPJ_FIRST, &CNPJ_SECOND), "11222333000181");
    }
}
