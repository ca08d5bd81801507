//! Brazilian taxpayer registry checksums
//!
//! CPF (individuals) and CNPJ (companies) numbers both end in two mod-11
//! check digits. The validators here accept any input string, keep only its
//! ASCII digits, and return the normalized digit string when it passes.

/// Keeps only the ASCII digits of `raw`
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn digit_values(digits: &str) -> Vec<u32> {
    digits.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Computes one mod-11 check digit over `digits` using `weights`
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        0 | 1 => 0,
        rem => 11 - rem,
    }
}

/// Sequences like 000... or 111... pass the arithmetic but are not issued
fn is_repeated(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

fn validate_with(raw: &str, length: usize, first: &[u32], second: &[u32]) -> Option<String> {
    let digits = normalize(raw);
    let values = digit_values(&digits);

    if values.len() != length || is_repeated(&values) {
        return None;
    }

    let body = length - 2;
    if check_digit(&values[..body], first) != values[body] {
        return None;
    }
    if check_digit(&values[..body + 1], second) != values[body + 1] {
        return None;
    }

    Some(digits)
}

/// Cadastro de Pessoas Físicas
pub mod cpf {
    /// Number of digits in a CPF
    pub const LENGTH: usize = 11;

    const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
    const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

    /// Validates a CPF, returning its 11 digits on success
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_party::checksum::cpf;
    ///
    /// assert_eq!(cpf::validate("529.982.247-25").as_deref(), Some("52998224725"));
    /// assert_eq!(cpf::validate("529.982.247-26"), None);
    /// ```
    pub fn validate(raw: &str) -> Option<String> {
        super::validate_with(raw, LENGTH, &FIRST_WEIGHTS, &SECOND_WEIGHTS)
    }

    /// Formats 11 digits as `000.000.000-00`
    ///
    /// Input that is not exactly 11 digits is returned unchanged.
    pub fn format(digits: &str) -> String {
        if digits.len() != LENGTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return digits.to_string();
        }
        format!(
            "{}.{}.{}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..11]
        )
    }
}

/// Cadastro Nacional da Pessoa Jurídica
pub mod cnpj {
    /// Number of digits in a CNPJ
    pub const LENGTH: usize = 14;

    const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
    const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

    /// Validates a CNPJ, returning its 14 digits on success
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_party::checksum::cnpj;
    ///
    /// assert_eq!(cnpj::validate("11.222.333/0001-81").as_deref(), Some("11222333000181"));
    /// assert_eq!(cnpj::validate("11.222.333/0001-82"), None);
    /// ```
    pub fn validate(raw: &str) -> Option<String> {
        super::validate_with(raw, LENGTH, &FIRST_WEIGHTS, &SECOND_WEIGHTS)
    }

    /// Formats 14 digits as `00.000.000/0000-00`
    ///
    /// Input that is not exactly 14 digits is returned unchanged.
    pub fn format(digits: &str) -> String {
        if digits.len() != LENGTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return digits.to_string();
        }
        format!(
            "{}.{}.{}/{}-{}",
            &digits[0..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..14]
        )
    }
}
