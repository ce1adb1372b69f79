//! Paced crawl over the portal: lawsuit lookup by number or URL, and the
//! sequential walk over every lawsuit a party is involved in.

use std::fmt::Display;
use std::future::Future;
use std::ops::ControlFlow;
use std::sync::Arc;

use eproc_api::types::{DocumentSearchResponse, LawsuitRecord};
use eproc_api::{
    DocumentSearchForm, Endpoint, HiddenPartiesCall, PortalClient, QuickSearchForm,
    SessionAuthenticator,
};
use url::Url;

use crate::config::{CrawlPolicy, CrawlerConfig};
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::EprocError;
use crate::parser::LawsuitParser;
use crate::tax_id::TaxIdClassifier;

/// Outcome counts of a multi-lawsuit crawl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Records handed to the callback.
    pub delivered: usize,
    /// Lawsuits dropped under skip-on-error.
    pub skipped: usize,
    /// The callback asked to stop before the list was exhausted.
    pub stopped: bool,
}

/// Fetches lawsuits through an authenticated portal session.
///
/// Requests go out one at a time. Multi-lawsuit crawls wait
/// [`CrawlPolicy::pause`] after every lawsuit.
pub struct PortalCrawler {
    client: PortalClient,
    parser: LawsuitParser,
    policy: CrawlPolicy,
    sink: Arc<dyn DiagnosticSink>,
}

impl PortalCrawler {
    pub fn new(auth: SessionAuthenticator, policy: CrawlPolicy) -> Self {
        let sink: Arc<dyn DiagnosticSink> = Arc::new(TracingSink);
        Self {
            client: PortalClient::new(auth),
            parser: LawsuitParser::new(TaxIdClassifier::default()).with_sink(sink.clone()),
            policy,
            sink,
        }
    }

    pub fn from_config(config: &CrawlerConfig) -> Result<Self, EprocError> {
        let auth = SessionAuthenticator::new(config.auth.clone())?;
        Ok(Self::new(auth, config.policy))
    }

    /// Routes degraded-record and skipped-lawsuit reports to `sink`.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.parser = self.parser.with_sink(sink.clone());
        self.sink = sink;
        self
    }

    pub fn authenticator(&self) -> &SessionAuthenticator {
        self.client.authenticator()
    }

    pub fn policy(&self) -> CrawlPolicy {
        self.policy
    }

    /// Fetches and parses a lawsuit page. `url` may be absolute or relative
    /// to the portal directory.
    pub async fn fetch_direct_lawsuit(&self, url: &str) -> Result<LawsuitRecord, EprocError> {
        let url = self.client.urls().resolve(url)?;
        let page = self.client.get_page(url).await?;
        let hidden_parties = self.fetch_hidden_parties(&page).await?;
        Ok(self.parser.parse(&page, hidden_parties.as_deref())?)
    }

    /// Loads the hidden-parties fragment a page links to, if any. A page
    /// whose marker cannot be matched is an error; a failed request is
    /// reported and yields `None`.
    async fn fetch_hidden_parties(&self, page: &str) -> Result<Option<String>, EprocError> {
        let Some(call) = HiddenPartiesCall::find(page)? else {
            return Ok(None);
        };
        let url = self.client.urls().resolve(&call.endpoint)?;
        match self.client.post_form(url.clone(), &call.form).await {
            Ok(fragment) => Ok(Some(fragment)),
            Err(e) => {
                self.sink.report(Diagnostic::HiddenPartiesUnavailable {
                    url: url.to_string(),
                    reason: e.to_string(),
                });
                Ok(None)
            }
        }
    }

    /// The process search page, reached through the quick-search link on the
    /// session's home page.
    pub async fn fetch_search_page(&self) -> Result<String, EprocError> {
        let home = self.client.home_url().await?;
        let home_page = self.client.get_page(home).await?;
        let relative = Endpoint::QuickSearch.locate(&home_page)?;
        let url = self.client.urls().resolve(&relative)?;
        Ok(self.client.get_page(url).await?)
    }

    /// Resolves a case number to its lawsuit page URL.
    pub async fn lawsuit_url(&self, number: &str) -> Result<Url, EprocError> {
        let search_page = self.fetch_search_page().await?;
        let relative = Endpoint::QuickSearch.locate(&search_page)?;
        let url = self.client.urls().resolve(&relative)?;
        Ok(self
            .client
            .post_form_for_redirect(url, &QuickSearchForm::new(number))
            .await?)
    }

    pub async fn fetch_lawsuit(&self, number: &str) -> Result<LawsuitRecord, EprocError> {
        let url = self.lawsuit_url(number).await?;
        tracing::info!("Lawsuit {} found at {}", number.trim(), url);
        self.fetch_direct_lawsuit(url.as_str()).await
    }

    /// URLs of every lawsuit where `tax_id` is a party.
    pub async fn fetch_entity_lawsuit_urls(&self, tax_id: &str) -> Result<Vec<Url>, EprocError> {
        let search_page = self.fetch_search_page().await?;
        let relative = Endpoint::DocumentSearch.locate(&search_page)?;
        let url = self.client.urls().resolve(&relative)?;

        let response: DocumentSearchResponse = self
            .client
            .post_form_json(url, &DocumentSearchForm::new(tax_id))
            .await?;
        tracing::info!("{} lawsuit(s) found for {}", response.resultados.len(), tax_id.trim());

        response
            .resultados
            .iter()
            .map(|r| {
                self.client
                    .urls()
                    .resolve(&r.link_processo_assinado)
                    .map_err(EprocError::from)
            })
            .collect()
    }

    /// Every lawsuit of `tax_id`, in search order.
    pub async fn fetch_entity_lawsuits(
        &self,
        tax_id: &str,
    ) -> Result<Vec<LawsuitRecord>, EprocError> {
        let mut records = Vec::new();
        self.fetch_entity_lawsuits_stream(tax_id, |record| {
            records.push(record);
            ControlFlow::Continue(())
        })
        .await?;
        Ok(records)
    }

    /// Hands each lawsuit of `tax_id` to `on_lawsuit` as soon as it is parsed.
    /// Returning `ControlFlow::Break` ends the crawl.
    pub async fn fetch_entity_lawsuits_stream<F>(
        &self,
        tax_id: &str,
        on_lawsuit: F,
    ) -> Result<CrawlSummary, EprocError>
    where
        F: FnMut(LawsuitRecord) -> ControlFlow<()>,
    {
        let urls = self.fetch_entity_lawsuit_urls(tax_id).await?;
        self.crawl_urls(&urls, on_lawsuit).await
    }

    /// Fetches each URL in order under the crawl policy.
    pub async fn crawl_urls<F>(&self, urls: &[Url], on_lawsuit: F) -> Result<CrawlSummary, EprocError>
    where
        F: FnMut(LawsuitRecord) -> ControlFlow<()>,
    {
        paced(
            urls,
            self.policy,
            self.sink.as_ref(),
            |url| self.fetch_direct_lawsuit(url.as_str()),
            on_lawsuit,
        )
        .await
    }
}

/// Runs `fetch` over `items` one at a time, delivering successes to
/// `on_record` and pausing after each item. Under skip-on-error any failure
/// of an item is reported and followed by an extra pause; only session
/// failures ([`EprocError::is_fatal`]) still end the run.
pub(crate) async fn paced<'a, T, R, F, Fut, C>(
    items: &'a [T],
    policy: CrawlPolicy,
    sink: &dyn DiagnosticSink,
    mut fetch: F,
    mut on_record: C,
) -> Result<CrawlSummary, EprocError>
where
    T: Display,
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<R, EprocError>>,
    C: FnMut(R) -> ControlFlow<()>,
{
    let mut summary = CrawlSummary::default();
    for (index, item) in items.iter().enumerate() {
        tracing::debug!("Crawling {}/{}: {}", index + 1, items.len(), item);
        match fetch(item).await {
            Ok(record) => {
                summary.delivered += 1;
                if on_record(record).is_break() {
                    summary.stopped = true;
                    tracing::info!("Crawl stopped after {} lawsuit(s)", summary.delivered);
                    return Ok(summary);
                }
            }
            Err(e) if e.is_fatal() || !policy.skip_on_error => {
                tracing::error!("Crawl aborted at {}: {}", item, e);
                return Err(e);
            }
            Err(e) => {
                summary.skipped += 1;
                sink.report(Diagnostic::LawsuitSkipped {
                    url: item.to_string(),
                    reason: e.to_string(),
                });
                tokio::time::sleep(policy.pause).await;
            }
        }
        tokio::time::sleep(policy.pause).await;
    }
    Ok(summary)
}
