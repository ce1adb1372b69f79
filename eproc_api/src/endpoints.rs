//! Endpoint discovery.
//!
//! The portal has no documented API: every authenticated endpoint is a
//! relative URL with a per-session hash, injected into page HTML or inline
//! scripts. All the patterns used to find them live here.

use std::sync::LazyLock;

use regex::Regex;

use crate::forms::HiddenPartiesForm;
use crate::Error;

static QUICK_SEARCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"controlador\.php\?acao=processo_pesquisa_rapida&hash=[0-9a-f]{32}")
        .expect("invalid regex: quick search")
});

static DOCUMENT_SEARCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"controlador_ajax\.php\?acao_ajax=processos_consulta_por_documento_identificacao&hash=[0-9a-f]{32}",
    )
    .expect("invalid regex: document search")
});

static HIDDEN_PARTIES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"controlador_ajax\.php\?acao_ajax=carregar_partes_ocultas_processo&hash=([0-9a-f]{32})")
        .expect("invalid regex: hidden parties")
});

static HIDDEN_PARTIES_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"javascript:carregarPartes\('([0-9]+)','([0-9]+)','([A-Z])'\)")
        .expect("invalid regex: hidden parties call")
});

/// Script call a lawsuit page embeds when some parties are only available via AJAX.
pub const HIDDEN_PARTIES_MARKER: &str = "javascript:carregarPartes";

/// The role a discovered endpoint plays in the crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Quick search page; also the POST target of a case-number lookup.
    QuickSearch,
    /// AJAX search of lawsuits by party tax ID.
    DocumentSearch,
    /// AJAX loader of parties hidden from the lawsuit page.
    HiddenParties,
}

impl Endpoint {
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::QuickSearch => "quick search",
            Endpoint::DocumentSearch => "document search",
            Endpoint::HiddenParties => "hidden parties",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Endpoint::QuickSearch => &*QUICK_SEARCH,
            Endpoint::DocumentSearch => &*DOCUMENT_SEARCH,
            Endpoint::HiddenParties => &*HIDDEN_PARTIES,
        }
    }

    /// First relative URL for this endpoint in `page`, if any.
    pub fn find(self, page: &str) -> Option<&str> {
        self.pattern().find(page).map(|m| m.as_str())
    }

    /// Like [`Endpoint::find`], failing with [`Error::Navigation`] when absent.
    pub fn locate(self, page: &str) -> Result<String, Error> {
        self.find(page).map(str::to_string).ok_or_else(|| {
            tracing::error!("No {} endpoint in page ({} bytes)", self.name(), page.len());
            Error::Navigation(format!("no {} endpoint in page", self.name()))
        })
    }
}

/// A lawsuit page's pending request for hidden parties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenPartiesCall {
    /// Relative AJAX URL, hash included.
    pub endpoint: String,
    /// The session hash of the AJAX URL.
    pub hash: String,
    pub form: HiddenPartiesForm,
}

impl HiddenPartiesCall {
    /// Extracts the hidden-parties request from a lawsuit page.
    ///
    /// Returns `Ok(None)` when the page has no hidden parties. A page that
    /// carries the marker but not the endpoint hash or the call arguments is a
    /// navigation failure.
    pub fn find(page: &str) -> Result<Option<Self>, Error> {
        if !page.contains(HIDDEN_PARTIES_MARKER) {
            return Ok(None);
        }

        let endpoint = HIDDEN_PARTIES.captures(page).ok_or_else(|| {
            Error::Navigation("hidden parties referenced but endpoint hash is missing".into())
        })?;
        let call = HIDDEN_PARTIES_CALL.captures(page).ok_or_else(|| {
            Error::Navigation("hidden parties referenced but call arguments are missing".into())
        })?;

        Ok(Some(Self {
            endpoint: endpoint[0].to_string(),
            hash: endpoint[1].to_string(),
            form: HiddenPartiesForm {
                process_id: call[1].to_string(),
                person_id: call[2].to_string(),
                party_type: call[3].to_string(),
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn test_quick_search_found_in_menu_link() {
        let page = format!(
            r#"<a href="controlador.php?acao=processo_pesquisa_rapida&hash={}">Pesquisa</a>"#,
            HASH
        );
        assert_eq!(
            Endpoint::QuickSearch.find(&page),
            Some(format!("controlador.php?acao=processo_pesquisa_rapida&hash={}", HASH).as_str())
        );
    }

    #[test]
    fn test_short_hash_is_not_an_endpoint() {
        let page = "controlador.php?acao=processo_pesquisa_rapida&hash=abc123";
        assert!(Endpoint::QuickSearch.find(page).is_none());
        let err = Endpoint::QuickSearch.locate(page).unwrap_err();
        assert!(matches!(err, Error::Navigation(_)));
    }

    #[test]
    fn test_document_search_found_in_script() {
        let page = format!(
            "var url = 'controlador_ajax.php?acao_ajax=processos_consulta_por_documento_identificacao&hash={}';",
            HASH
        );
        let found = Endpoint::DocumentSearch.locate(&page).unwrap();
        assert!(found.ends_with(HASH));
        assert!(Endpoint::QuickSearch.find(&page).is_none());
    }

    #[test]
    fn test_page_without_marker_has_no_hidden_parties() {
        assert_eq!(HiddenPartiesCall::find("<html></html>").unwrap(), None);
    }

    #[test]
    fn test_hidden_parties_call_extracted() {
        let page = format!(
            "<a href=\"javascript:carregarPartes('1234567','890','R')\">ver</a>\
             <script>url='controlador_ajax.php?acao_ajax=carregar_partes_ocultas_processo&hash={}'</script>",
            HASH
        );
        let call = HiddenPartiesCall::find(&page).unwrap().unwrap();
        assert_eq!(call.hash, HASH);
        assert_eq!(call.form.process_id, "1234567");
        assert_eq!(call.form.person_id, "890");
        assert_eq!(call.form.party_type, "R");
    }

    #[test]
    fn test_marker_without_hash_is_navigation_error() {
        let page = "<a href=\"javascript:carregarPartes('1','2','R')\">ver</a>";
        let err = HiddenPartiesCall::find(page).unwrap_err();
        assert!(matches!(err, Error::Navigation(_)));
    }
}
