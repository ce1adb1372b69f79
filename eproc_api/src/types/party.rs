//! Lawsuit parties and their tax classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a tax ID belongs to a natural person (CPF) or a legal entity (CNPJ).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonType {
    #[serde(rename = "Física")]
    Individual,
    #[serde(rename = "Jurídica")]
    LegalEntity,
}

impl PersonType {
    /// Portuguese label used by the portal: `Física` or `Jurídica`.
    pub fn describe(self) -> &'static str {
        match self {
            PersonType::Individual => "Física",
            PersonType::LegalEntity => "Jurídica",
        }
    }

    /// One-letter form: `F` or `J`.
    pub fn abbreviate(self) -> char {
        match self {
            PersonType::Individual => 'F',
            PersonType::LegalEntity => 'J',
        }
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// An author or defendant of a lawsuit.
///
/// `person_type` is set exactly when `tax_id` is set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub name: String,

    /// Bare CPF/CNPJ digits, `None` when absent or failing both checksums.
    pub tax_id: Option<String>,

    pub person_type: Option<PersonType>,
}

impl Party {
    /// A party without a usable tax ID.
    pub fn unidentified(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tax_id: None,
            person_type: None,
        }
    }

    /// A party whose tax ID passed classification.
    pub fn identified(name: &str, tax_id: &str, person_type: PersonType) -> Self {
        Self {
            name: name.to_string(),
            tax_id: Some(tax_id.to_string()),
            person_type: Some(person_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_type_labels() {
        assert_eq!(PersonType::Individual.describe(), "Física");
        assert_eq!(PersonType::LegalEntity.describe(), "Jurídica");
        assert_eq!(PersonType::Individual.abbreviate(), 'F');
        assert_eq!(PersonType::LegalEntity.abbreviate(), 'J');
        assert_eq!(PersonType::LegalEntity.to_string(), "Jurídica");
    }

    #[test]
    fn test_person_type_serializes_as_label() {
        let json = serde_json::to_string(&PersonType::Individual).unwrap();
        assert_eq!(json, "\"Física\"");
    }
}
