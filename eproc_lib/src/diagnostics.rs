//! Non-fatal problems noticed while crawling.
//!
//! Failures that degrade a result instead of aborting it are reported to a
//! [`DiagnosticSink`]. The default sink logs them; tests and callers that want
//! to act on them can collect them with [`RecordingSink`].

use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The hidden-parties request failed. The lawsuit keeps its inline defendant.
    HiddenPartiesUnavailable { url: String, reason: String },
    /// The hidden-parties fragment was fetched but could not be parsed.
    HiddenPartiesDiscarded { lawsuit: String, reason: String },
    /// A lawsuit failed and was dropped from a skip-on-error crawl.
    LawsuitSkipped { url: String, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::HiddenPartiesUnavailable { url, reason } => {
                write!(f, "hidden parties unavailable at {}: {}", url, reason)
            }
            Diagnostic::HiddenPartiesDiscarded { lawsuit, reason } => {
                write!(f, "hidden parties of {} discarded: {}", lawsuit, reason)
            }
            Diagnostic::LawsuitSkipped { url, reason } => {
                write!(f, "lawsuit {} skipped: {}", url, reason)
            }
        }
    }
}

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Logs every diagnostic as a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::debug!("{}", diagnostic);
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(diagnostic);
    }
}
