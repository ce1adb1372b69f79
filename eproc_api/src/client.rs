//! Authenticated HTTP access to the eproc portal.

use reqwest::header::{CONTENT_TYPE, COOKIE, LOCATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    auth::{Session, SessionAuthenticator},
    errors::truncate_body,
    forms::Form,
    portal::PortalUrls,
    Error,
};

const MAX_REDIRECTS: usize = 10;

/// Sends a GET with the given cookie header, following redirects by hand so
/// the cookie header is repeated on every hop. The returned response's `url()`
/// is the final location.
pub(crate) async fn get_following(
    client: &reqwest::Client,
    url: Url,
    cookie_header: &str,
) -> Result<reqwest::Response, Error> {
    let start = url.clone();
    let mut url = url;
    for _ in 0..=MAX_REDIRECTS {
        let mut request = client.get(url.clone());
        if !cookie_header.is_empty() {
            request = request.header(COOKIE, cookie_header);
        }
        let resp = request.send().await?;
        if !resp.status().is_redirection() {
            return Ok(resp);
        }
        let location = resp
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let Some(location) = location else {
            return Ok(resp);
        };
        let next = url.join(&location)?;
        tracing::debug!("Following redirect {} -> {}", url, next);
        url = next;
    }
    Err(Error::TooManyRedirects(start.to_string()))
}

/// Decodes a single-byte ISO-8859-1 body. Every byte maps to the code point of
/// the same value, so decoding cannot fail.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Decodes an AJAX body: UTF-8 when valid, ISO-8859-1 otherwise.
fn decode_ajax(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => decode_latin1(bytes),
    }
}

/// Portal client that authenticates lazily and sends the session cookies with
/// every request.
///
/// Requests are issued one at a time; nothing here runs concurrently.
pub struct PortalClient {
    auth: SessionAuthenticator,
}

impl PortalClient {
    pub fn new(auth: SessionAuthenticator) -> Self {
        Self { auth }
    }

    pub fn authenticator(&self) -> &SessionAuthenticator {
        &self.auth
    }

    pub fn urls(&self) -> &PortalUrls {
        self.auth.urls()
    }

    /// The current session, authenticating first if none exists yet.
    pub async fn session(&self) -> Result<Session, Error> {
        if let Some(session) = self.auth.session() {
            return Ok(session);
        }
        self.auth.authenticate().await?;
        self.auth
            .session()
            .ok_or_else(|| Error::Authentication("no session after login".into()))
    }

    pub async fn home_url(&self) -> Result<Url, Error> {
        Ok(self.session().await?.home_url().clone())
    }

    pub async fn cookie_header(&self) -> Result<String, Error> {
        Ok(self.session().await?.cookie_header())
    }

    /// Fetches an HTML page and decodes it from ISO-8859-1.
    pub async fn get_page(&self, url: Url) -> Result<String, Error> {
        let cookies = self.cookie_header().await?;
        let client = self.auth.transport().await?;

        tracing::debug!("GET {}", url);
        let resp = get_following(client, url, &cookies).await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        let body = decode_latin1(&bytes);

        if !status.is_success() {
            tracing::error!("Request failed with status {}: {}", status, truncate_body(&body));
            return Err(Error::status(status, &body));
        }
        Ok(body)
    }

    async fn post(&self, url: Url, form: &impl Form) -> Result<reqwest::Response, Error> {
        let cookies = self.cookie_header().await?;
        let client = self.auth.transport().await?;

        tracing::debug!("POST {}", url);
        let mut request = client
            .post(url)
            .header(CONTENT_TYPE, form.content_type())
            .body(form.encode());
        if !cookies.is_empty() {
            request = request.header(COOKIE, cookies);
        }
        Ok(request.send().await?)
    }

    /// Posts a form and returns the decoded response body.
    pub async fn post_form(&self, url: Url, form: &impl Form) -> Result<String, Error> {
        let resp = self.post(url, form).await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        let body = decode_ajax(&bytes);

        if !status.is_success() {
            tracing::error!("Request failed with status {}: {}", status, truncate_body(&body));
            return Err(Error::status(status, &body));
        }
        Ok(body)
    }

    /// Posts a form and deserializes the JSON response.
    pub async fn post_form_json<T: DeserializeOwned>(
        &self,
        url: Url,
        form: &impl Form,
    ) -> Result<T, Error> {
        let body = self.post_form(url, form).await?;
        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("Failed to parse response: {} | body: {}", e, truncate_body(&body));
            Error::Json(e)
        })
    }

    /// Posts a form that must answer `302`, returning the `Location` target
    /// resolved against the portal directory.
    pub async fn post_form_for_redirect(&self, url: Url, form: &impl Form) -> Result<Url, Error> {
        let resp = self.post(url, form).await?;
        let status = resp.status();
        if status != StatusCode::FOUND {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!("Expected a redirect, got {}: {}", status, truncate_body(&body));
            return Err(Error::status(status, &body));
        }

        let location = resp
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| Error::Navigation("redirect without a Location header".into()))?;
        self.urls().resolve(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1_maps_high_bytes() {
        // "Ação" in ISO-8859-1
        let bytes = [0x41, 0xE7, 0xE3, 0x6F];
        assert_eq!(decode_latin1(&bytes), "Ação");
    }

    #[test]
    fn test_ajax_prefers_utf8() {
        assert_eq!(decode_ajax("Ação".as_bytes()), "Ação");
        assert_eq!(decode_ajax(&[0x41, 0xE7, 0xE3, 0x6F]), "Ação");
    }
}
