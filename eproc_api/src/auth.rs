//! Certificate-based session authentication.
//!
//! The portal logs a client in through a fixed redirect dance: the login
//! endpoint is fetched over a TLS connection carrying the PKCS#12 client
//! certificate, answers `302` with the session cookies, and the entry page then
//! lands on a per-session home URL carrying a `hash=` token. Every later
//! navigation starts from that home URL.

use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use reqwest::header::{LOCATION, SET_COOKIE};
use reqwest::StatusCode;
use tokio::sync::OnceCell;
use url::{Position, Url};

use crate::client::get_following;
use crate::portal::{PortalUrls, DEFAULT_BASE_URL, EXPECTED_LOGIN_REDIRECT};
use crate::user_agent::{get_user_agent, DEFAULT_USER_AGENT};
use crate::Error;

/// Request timeout applied to the authenticated transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Inputs needed to open a portal session.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Path of the PKCS#12 (`.pfx`) client certificate.
    pub certificate_path: PathBuf,
    /// Passphrase protecting the certificate.
    pub passphrase: String,
    /// User agent sent with every request.
    pub user_agent: String,
    /// Portal base URL. Defaults to the production portal.
    pub base_url: String,
    /// Per-request timeout of the transport.
    pub timeout: Duration,
}

impl AuthConfig {
    pub fn new(certificate_path: impl Into<PathBuf>, passphrase: impl Into<String>) -> Self {
        Self {
            certificate_path: certificate_path.into(),
            passphrase: passphrase.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// A blank user agent keeps the default.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = get_user_agent(Some(user_agent));
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Where the authenticator stands in the login protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticating,
    Authenticated,
    /// The last attempt violated the protocol. Calling `authenticate` again retries.
    Failed,
}

/// Session cookies keyed by name.
///
/// Setting an existing name replaces its value in place, so the rendered
/// header keeps first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    entries: Vec<(String, String)>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    /// Stores the `name=value` pair at the head of a `Set-Cookie` header value,
    /// ignoring its attributes. Returns `false` for a value without a name.
    pub fn absorb_set_cookie(&mut self, raw: &str) -> bool {
        let pair = raw.split(';').next().unwrap_or_default().trim();
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.set(name, value.trim());
        true
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Renders the jar as a `Cookie` header value: `a=1; b=2`.
    pub fn header(&self) -> String {
        self.entries
            .iter()
            .map(|(n, v)| format!("{}={}", n, v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// An authenticated portal session.
#[derive(Debug, Clone)]
pub struct Session {
    cookies: CookieJar,
    home_url: Url,
}

impl Session {
    pub fn cookies(&self) -> &CookieJar {
        &self.cookies
    }

    /// Absolute home URL carrying the session's `hash=` token.
    pub fn home_url(&self) -> &Url {
        &self.home_url
    }

    pub fn cookie_header(&self) -> String {
        self.cookies.header()
    }
}

/// Base transport settings shared by every portal request.
///
/// Redirects are never followed automatically: the login step must observe the
/// raw `302`, and page fetches follow redirects by hand so the session cookie
/// header travels with every hop.
pub fn transport_builder(user_agent: &str, timeout: Duration) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::none())
}

/// Owns the client certificate, the TLS transport and the session state.
///
/// The certificate bytes and the transport are built at most once per
/// instance. The session itself is replaced on every `authenticate` call.
pub struct SessionAuthenticator {
    config: AuthConfig,
    urls: PortalUrls,
    certificate: OnceCell<Vec<u8>>,
    transport: OnceCell<reqwest::Client>,
    session: Mutex<Option<Session>>,
    state: Mutex<AuthState>,
}

impl SessionAuthenticator {
    pub fn new(config: AuthConfig) -> Result<Self, Error> {
        let urls = PortalUrls::new(&config.base_url)?;
        Ok(Self {
            config,
            urls,
            certificate: OnceCell::new(),
            transport: OnceCell::new(),
            session: Mutex::new(None),
            state: Mutex::new(AuthState::Unauthenticated),
        })
    }

    /// Creates an authenticator around a prebuilt transport; the certificate is
    /// never read. The client should come from [`transport_builder`] so that
    /// redirects stay unfollowed. Used for testing with wiremock.
    pub fn with_transport(config: AuthConfig, transport: reqwest::Client) -> Result<Self, Error> {
        let urls = PortalUrls::new(&config.base_url)?;
        Ok(Self {
            config,
            urls,
            certificate: OnceCell::new(),
            transport: OnceCell::from(transport),
            session: Mutex::new(None),
            state: Mutex::new(AuthState::Unauthenticated),
        })
    }

    pub fn urls(&self) -> &PortalUrls {
        &self.urls
    }

    pub fn user_agent(&self) -> &str {
        &self.config.user_agent
    }

    pub fn state(&self) -> AuthState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// A copy of the current session, if one has been established.
    pub fn session(&self) -> Option<Session> {
        self.session
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn session_cookies(&self) -> Option<CookieJar> {
        self.session().map(|s| s.cookies)
    }

    pub fn home_url(&self) -> Option<Url> {
        self.session().map(|s| s.home_url)
    }

    /// The session cookies rendered as a `Cookie` header, if authenticated.
    pub fn cookie_header(&self) -> Option<String> {
        self.session().map(|s| s.cookie_header())
    }

    async fn certificate(&self) -> Result<&[u8], Error> {
        let bytes = self
            .certificate
            .get_or_try_init(|| async {
                tracing::debug!("Reading certificate {}", self.config.certificate_path.display());
                tokio::fs::read(&self.config.certificate_path)
                    .await
                    .map_err(|source| Error::Certificate {
                        path: self.config.certificate_path.clone(),
                        source,
                    })
            })
            .await?;
        Ok(bytes.as_slice())
    }

    /// The TLS transport carrying the client certificate, built on first use.
    pub async fn transport(&self) -> Result<&reqwest::Client, Error> {
        self.transport
            .get_or_try_init(|| async {
                let der = self.certificate().await?;
                let identity = reqwest::Identity::from_pkcs12_der(der, &self.config.passphrase)
                    .map_err(|source| {
                        tracing::error!("Failed to load client certificate: {}", source);
                        Error::InvalidCertificate {
                            path: self.config.certificate_path.clone(),
                            source,
                        }
                    })?;
                let client = transport_builder(&self.config.user_agent, self.config.timeout)
                    .identity(identity)
                    .build()?;
                Ok(client)
            })
            .await
    }

    fn set_state(&self, state: AuthState) {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = state;
    }

    fn set_session(&self, session: Option<Session>) {
        *self.session.lock().unwrap_or_else(|e| e.into_inner()) = session;
    }

    /// Runs the full login sequence and replaces the current session.
    ///
    /// On failure the authenticator is left in [`AuthState::Failed`] with no session.
    pub async fn authenticate(&self) -> Result<(), Error> {
        self.set_session(None);
        self.set_state(AuthState::Authenticating);

        match self.negotiate().await {
            Ok(session) => {
                tracing::info!(
                    "Authenticated with {} cookie(s), home {}",
                    session.cookies.len(),
                    session.home_url
                );
                self.set_session(Some(session));
                self.set_state(AuthState::Authenticated);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Authentication failed: {}", e);
                self.set_state(AuthState::Failed);
                Err(e)
            }
        }
    }

    async fn negotiate(&self) -> Result<Session, Error> {
        let client = self.transport().await?;

        let login = self.urls.login()?;
        tracing::debug!("GET {}", login);
        let resp = client.get(login).send().await?;

        let status = resp.status();
        if status != StatusCode::FOUND {
            return Err(Error::Authentication(format!(
                "certificate login answered {} instead of a redirect",
                status
            )));
        }

        let location = resp
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if location != EXPECTED_LOGIN_REDIRECT {
            return Err(Error::Authentication(format!(
                "unexpected redirect to {:?}",
                location
            )));
        }

        let mut cookies = CookieJar::new();
        for raw in resp.headers().get_all(SET_COOKIE) {
            match raw.to_str() {
                Ok(raw) => {
                    if !cookies.absorb_set_cookie(raw) {
                        tracing::debug!("Ignoring nameless cookie {:?}", raw);
                    }
                }
                Err(_) => tracing::debug!("Ignoring non-ASCII Set-Cookie header"),
            }
        }

        let entry = self.urls.entry()?;
        tracing::debug!("GET {}", entry);
        let home = get_following(client, entry, &cookies.header()).await?;
        let status = home.status();
        if !status.is_success() {
            let body = home.text().await.unwrap_or_default();
            return Err(Error::status(status, &body));
        }

        let landed = home.url().clone();
        let path = &landed[Position::BeforePath..];
        if !path.contains("hash=") {
            return Err(Error::Authentication(format!("hash is missing: {}", path)));
        }

        Ok(Session {
            cookies,
            home_url: self.urls.rebase(&landed)?,
        })
    }
}
