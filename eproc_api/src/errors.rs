//! Error types for the portal protocol layer.

use std::path::PathBuf;

/// Errors that can occur while talking to the eproc portal.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The certificate login did not follow the expected redirect protocol,
    /// or the entry page did not land on a hashed home URL.
    #[error("authentication failed: {0}")]
    Authentication(String),
    /// An endpoint that should be embedded in a fetched page could not be found.
    #[error("navigation failed: {0}")]
    Navigation(String),
    /// The client certificate could not be read from disk.
    #[error("failed to read certificate {path}: {source}")]
    Certificate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The certificate was read but is not a PKCS#12 bundle the passphrase opens.
    #[error("invalid certificate {path}: {source}")]
    InvalidCertificate {
        path: PathBuf,
        #[source]
        source: reqwest::Error,
    },
    /// A GET kept redirecting past the hop limit.
    #[error("too many redirects starting at {0}")]
    TooManyRedirects(String),
    /// An HTTP request failed (network error, TLS setup, timeout).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// The portal answered with a status the protocol step does not accept.
    #[error("unexpected status {status}")]
    HttpStatus { status: u16, body: String },
    /// A portal URL could not be built or resolved.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// A JSON response could not be decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn status(status: reqwest::StatusCode, body: &str) -> Self {
        Error::HttpStatus {
            status: status.as_u16(),
            body: truncate_body(body),
        }
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
