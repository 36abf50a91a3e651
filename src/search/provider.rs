use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::locale::Locale;
use crate::search::duckduckgo::DuckDuckGoBackend;
use crate::{Result, SlideError};

/// Result count used when a caller asks for 0.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// One ranked search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub title: String,
    pub snippet: String,
}

impl SearchResultItem {
    pub fn new(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
        }
    }
}

#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResultItem>>;
}

/// Build a search backend from runtime settings.
pub fn build_backend(settings: &Settings) -> Result<Box<dyn SearchBackend>> {
    match settings.search.provider.to_lowercase().as_str() {
        "duckduckgo" | "ddg" => Ok(Box::new(DuckDuckGoBackend::from_settings(settings)?)),
        other => Err(SlideError::Config(format!(
            "Unsupported search.provider '{}'. Supported providers: duckduckgo",
            other
        ))),
    }
}

/// Search front end that never fails.
///
/// Backend errors are replaced with a single placeholder item describing the
/// failure, so the outline stage always receives well-formed input.
pub struct SearchProvider {
    backend: Box<dyn SearchBackend>,
    locale: Locale,
}

impl SearchProvider {
    pub fn new(backend: Box<dyn SearchBackend>, locale: Locale) -> Self {
        Self { backend, locale }
    }

    pub async fn search(&self, query: &str, max_results: usize) -> Vec<SearchResultItem> {
        let max_results = if max_results == 0 {
            DEFAULT_MAX_RESULTS
        } else {
            max_results
        };

        match self.backend.search(query, max_results).await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Search returned results");
                items
            }
            Err(e) => {
                tracing::warn!(error = %e, "Search failed, continuing in demo mode");
                vec![placeholder_item(&e, self.locale)]
            }
        }
    }
}

fn placeholder_item(error: &SlideError, locale: Locale) -> SearchResultItem {
    match locale {
        Locale::Ja => SearchResultItem::new(
            "検索エラー",
            format!("{}\n\nデモモードで進めます。", error),
        ),
        Locale::En => SearchResultItem::new(
            "Search error",
            format!("{}\n\nContinuing in demo mode.", error),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenBackend;

    #[async_trait]
    impl SearchBackend for BrokenBackend {
        async fn search(&self, _query: &str, _max: usize) -> Result<Vec<SearchResultItem>> {
            Err(SlideError::Search("connection refused".to_string()))
        }
    }

    struct CountingBackend;

    #[async_trait]
    impl SearchBackend for CountingBackend {
        async fn search(&self, query: &str, max: usize) -> Result<Vec<SearchResultItem>> {
            Ok((1..=max)
                .map(|i| SearchResultItem::new(format!("{query} {i}"), "body"))
                .collect())
        }
    }

    #[test]
    fn failure_becomes_single_placeholder() {
        let provider = SearchProvider::new(Box::new(BrokenBackend), Locale::Ja);
        let items = tokio_test::block_on(provider.search("rust", 5));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "検索エラー");
        assert!(items[0].snippet.contains("connection refused"));
        assert!(items[0].snippet.ends_with("デモモードで進めます。"));
    }

    #[test]
    fn zero_max_results_uses_default_count() {
        let provider = SearchProvider::new(Box::new(CountingBackend), Locale::En);
        let items = tokio_test::block_on(provider.search("rust", 0));

        assert_eq!(items.len(), DEFAULT_MAX_RESULTS);
        assert_eq!(items[0], SearchResultItem::new("rust 1", "body"));
        assert_eq!(items[4], SearchResultItem::new("rust 5", "body"));
    }

    #[test]
    fn explicit_max_results_is_passed_through() {
        let provider = SearchProvider::new(Box::new(CountingBackend), Locale::En);
        let items = tokio_test::block_on(provider.search("rust", 2));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn unsupported_provider_returns_error() {
        let mut settings = Settings::default();
        settings.search.provider = "bing".to_string();

        let err = match build_backend(&settings) {
            Ok(_) => panic!("expected backend creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Unsupported search.provider"));
    }
}
