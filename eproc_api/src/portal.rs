//! Fixed locations on the eproc portal.
//!
//! Every authenticated page lives under `{base}/eproc/`; links embedded in
//! pages, JSON results and redirect targets are relative to that directory.

use url::{Position, Url};

use crate::Error;

/// Production portal (TJRS, first instance).
pub const DEFAULT_BASE_URL: &str = "https://eproc1g.tjrs.jus.br/";

/// Certificate login endpoint, relative to the base URL.
pub const LOGIN_CERT_PATH: &str = "eproc/lib/priv/login_cert.php?acao_origem=";

/// The only redirect target the certificate login may answer with.
pub const EXPECTED_LOGIN_REDIRECT: &str = "../../externo_controlador.php?acao=entrar_cert";

/// Entry page that lands on the hashed home URL once cookies are set.
pub const ENTRY_PATH: &str = "eproc/externo_controlador.php?acao=entrar_cert";

const PORTAL_DIR: &str = "eproc/";

/// Resolved base and portal directory URLs.
#[derive(Debug, Clone)]
pub struct PortalUrls {
    base: Url,
    portal: Url,
}

impl PortalUrls {
    /// Builds the URL set for a base such as `https://eproc1g.tjrs.jus.br/`.
    /// A missing trailing slash is added.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base = Url::parse(&normalized)?;
        let portal = base.join(PORTAL_DIR)?;
        Ok(Self { base, portal })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn login(&self) -> Result<Url, Error> {
        Ok(self.base.join(LOGIN_CERT_PATH)?)
    }

    pub fn entry(&self) -> Result<Url, Error> {
        Ok(self.base.join(ENTRY_PATH)?)
    }

    /// Resolves a link relative to the portal directory (`{base}/eproc/`).
    pub fn resolve(&self, relative: &str) -> Result<Url, Error> {
        Ok(self.portal.join(relative.trim())?)
    }

    /// Re-roots the path and query of `landed` onto the configured base.
    pub(crate) fn rebase(&self, landed: &Url) -> Result<Url, Error> {
        let path_and_query = &landed[Position::BeforePath..];
        Ok(self.base.join(path_and_query.trim_start_matches('/'))?)
    }
}
