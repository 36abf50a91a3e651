use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html, Selector};

use crate::config::Settings;
use crate::search::provider::{SearchBackend, SearchResultItem};
use crate::{Result, SlideError};

const DEFAULT_DDG_ENDPOINT: &str = "https://html.duckduckgo.com/html/";
const USER_AGENT: &str = concat!("webslide/", env!("CARGO_PKG_VERSION"));

/// DuckDuckGo's no-JavaScript HTML results page.
pub struct DuckDuckGoBackend {
    http: Client,
    endpoint: String,
    region: String,
}

impl DuckDuckGoBackend {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let endpoint = if settings.search.endpoint.trim().is_empty() {
            DEFAULT_DDG_ENDPOINT.to_string()
        } else {
            settings.search.endpoint.trim().to_string()
        };

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SlideError::Config(format!("Failed to build search HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint,
            region: settings.search.region.trim().to_string(),
        })
    }
}

#[async_trait]
impl SearchBackend for DuckDuckGoBackend {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResultItem>> {
        let mut params = vec![("q", query)];
        if !self.region.is_empty() {
            params.push(("kl", self.region.as_str()));
        }

        let response = self
            .http
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await
            .map_err(|e| SlideError::Search(format!("DuckDuckGo request failed: {e}")))?;

        // DuckDuckGo answers rate-limited clients with 202 and an empty page.
        let status = response.status();
        if status != StatusCode::OK {
            return Err(SlideError::Search(format!(
                "DuckDuckGo returned {status} (rate limited or unavailable)"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SlideError::Search(format!("Failed to read DuckDuckGo response: {e}")))?;

        parse_results(&body, max_results)
    }
}

/// Extract organic results from a DuckDuckGo HTML page, in page order.
pub(crate) fn parse_results(body: &str, max_results: usize) -> Result<Vec<SearchResultItem>> {
    let document = Html::parse_document(body);
    let result_sel = selector(".result")?;
    let title_sel = selector(".result__a")?;
    let snippet_sel = selector(".result__snippet")?;

    let items = document
        .select(&result_sel)
        .filter(|node| !node.value().classes().any(|c| c == "result--ad"))
        .filter_map(|node| {
            let title = node.select(&title_sel).next().map(collapsed_text)?;
            if title.is_empty() {
                return None;
            }
            let snippet = node
                .select(&snippet_sel)
                .next()
                .map(collapsed_text)
                .unwrap_or_default();
            Some(SearchResultItem { title, snippet })
        })
        .take(max_results)
        .collect();

    Ok(items)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| SlideError::Search(format!("Invalid selector '{css}': {e}")))
}

fn collapsed_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
