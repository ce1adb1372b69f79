//! CPF / CNPJ validation and classification.
//!
//! Both Brazilian tax identifiers end in two mod-11 check digits. A CPF has 11
//! digits and identifies a natural person; a CNPJ has 14 and identifies a legal
//! entity. Formatting masks (`529.982.247-25`, `11.222.333/0001-81`) are
//! accepted and ignored.

use eproc_api::types::PersonType;

/// The document matched neither the CPF nor the CNPJ checksum.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid document \"{document}\": not a valid CPF or CNPJ")]
pub struct ValidationError {
    pub document: String,
}

/// Strips mask characters, returning the digits. `None` when the input holds
/// anything other than digits and `.`, `-`, `/` or whitespace.
pub fn strip_mask(document: &str) -> Option<Vec<u8>> {
    let mut digits = Vec::with_capacity(document.len());
    for c in document.chars() {
        match c {
            '0'..='9' => digits.push(c as u8 - b'0'),
            '.' | '-' | '/' => {}
            c if c.is_whitespace() => {}
            _ => return None,
        }
    }
    Some(digits)
}

/// A national check-digit scheme over a fixed number of digits.
pub trait ChecksumScheme {
    /// Total number of digits, check digits included.
    fn length(&self) -> usize;

    /// Computes the two check digits for the leading `length() - 2` digits.
    fn check_digits(&self, body: &[u8]) -> [u8; 2];

    /// Validates bare digits. Sequences of one repeated digit are rejected
    /// even though they satisfy the arithmetic.
    fn validate_digits(&self, digits: &[u8]) -> bool {
        if digits.len() != self.length() {
            return false;
        }
        if digits.iter().all(|&d| d == digits[0]) {
            return false;
        }
        let (body, check) = digits.split_at(self.length() - 2);
        self.check_digits(body) == [check[0], check[1]]
    }

    /// Validates a possibly masked document.
    fn validate(&self, document: &str) -> bool {
        strip_mask(document).is_some_and(|digits| self.validate_digits(&digits))
    }
}

/// Individual taxpayer registry number (11 digits).
#[derive(Debug, Clone, Copy, Default)]
pub struct Cpf;

impl Cpf {
    fn digit(digits: &[u8]) -> u8 {
        let first_weight = digits.len() as u32 + 1;
        let sum: u32 = digits
            .iter()
            .enumerate()
            .map(|(i, &d)| u32::from(d) * (first_weight - i as u32))
            .sum();
        match (sum * 10) % 11 {
            10 => 0,
            r => r as u8,
        }
    }
}

impl ChecksumScheme for Cpf {
    fn length(&self) -> usize {
        11
    }

    fn check_digits(&self, body: &[u8]) -> [u8; 2] {
        let first = Self::digit(body);
        let mut extended = body.to_vec();
        extended.push(first);
        [first, Self::digit(&extended)]
    }
}

/// Legal entity registry number (14 digits).
#[derive(Debug, Clone, Copy, Default)]
pub struct Cnpj;

impl Cnpj {
    const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
    const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

    fn digit(digits: &[u8], weights: &[u32]) -> u8 {
        let sum: u32 = digits
            .iter()
            .zip(weights)
            .map(|(&d, &w)| u32::from(d) * w)
            .sum();
        match sum % 11 {
            r if r < 2 => 0,
            r => (11 - r) as u8,
        }
    }
}

impl ChecksumScheme for Cnpj {
    fn length(&self) -> usize {
        14
    }

    fn check_digits(&self, body: &[u8]) -> [u8; 2] {
        let first = Self::digit(body, &Self::FIRST_WEIGHTS);
        let mut extended = body.to_vec();
        extended.push(first);
        [first, Self::digit(&extended, &Self::SECOND_WEIGHTS)]
    }
}

/// Classifies tax IDs as individuals or legal entities.
#[derive(Debug, Clone, Default)]
pub struct TaxIdClassifier {
    cpf: Cpf,
    cnpj: Cnpj,
}

impl TaxIdClassifier {
    pub fn new(cpf: Cpf, cnpj: Cnpj) -> Self {
        Self { cpf, cnpj }
    }

    pub fn classify(&self, document: &str) -> Result<PersonType, ValidationError> {
        if self.cpf.validate(document) {
            Ok(PersonType::Individual)
        } else if self.cnpj.validate(document) {
            Ok(PersonType::LegalEntity)
        } else {
            Err(ValidationError {
                document: document.to_string(),
            })
        }
    }

    /// Bare digits of `raw` when it is a valid CPF or CNPJ.
    pub fn clean_mask_and_validate(&self, raw: &str) -> Option<String> {
        let digits = strip_mask(raw)?;
        if !self.cpf.validate_digits(&digits) && !self.cnpj.validate_digits(&digits) {
            return None;
        }
        Some(digits.iter().map(|d| char::from(b'0' + d)).collect())
    }

    /// `Física` / `Jurídica`.
    pub fn describe(kind: PersonType) -> &'static str {
        kind.describe()
    }

    /// `F` / `J`.
    pub fn abbreviate(kind: PersonType) -> char {
        kind.abbreviate()
    }
}

#[cfg(test)]
#[path = "tax_id_tests.rs"]
mod tests;
