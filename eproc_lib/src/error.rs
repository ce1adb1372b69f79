//! Error types for the library layer.

use std::fmt;

use crate::parser::ParseError;
use crate::tax_id::ValidationError;

/// Errors produced by the library layer, wrapping portal errors and adding
/// page parsing, tax-ID validation and configuration failures.
#[derive(Debug)]
pub enum EprocError {
    /// An error from the portal protocol layer.
    Portal(eproc_api::Error),
    /// A lawsuit page did not have the expected structure.
    Parse(ParseError),
    /// A document was neither a valid CPF nor a valid CNPJ.
    Validation(ValidationError),
    /// Missing or malformed configuration.
    Config(String),
}

impl EprocError {
    /// Failures to open a session. Every later request would fail the same
    /// way, so a crawl ends on them even when lawsuits may be skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Portal(eproc_api::Error::Authentication(_))
                | Self::Portal(eproc_api::Error::Certificate { .. })
                | Self::Portal(eproc_api::Error::InvalidCertificate { .. })
                | Self::Config(_)
        )
    }
}

impl fmt::Display for EprocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Portal(e) => write!(f, "Portal error: {}", e),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for EprocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Portal(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Validation(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<eproc_api::Error> for EprocError {
    fn from(e: eproc_api::Error) -> Self {
        Self::Portal(e)
    }
}

impl From<ParseError> for EprocError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ValidationError> for EprocError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
