//! Library layer for the eproc crawler: tax-ID classification, lawsuit page
//! parsing, and the paced crawl over a party's lawsuits.
//!
//! Wraps the `eproc_api` protocol crate with an HTML parser, a CPF/CNPJ
//! classifier, injectable diagnostics, and environment-driven configuration.

pub mod config;
pub mod crawler;
pub mod diagnostics;
pub mod error;
pub mod parser;
pub mod tax_id;

pub use eproc_api;
pub use eproc_api::types;
pub use eproc_api::{AuthConfig, AuthState, SessionAuthenticator};

pub use config::{CrawlPolicy, CrawlerConfig};
pub use crawler::{CrawlSummary, PortalCrawler};
pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingSink, TracingSink};
pub use error::EprocError;
pub use parser::{LawsuitParser, ParseError};
pub use tax_id::{ChecksumScheme, Cnpj, Cpf, TaxIdClassifier, ValidationError};
