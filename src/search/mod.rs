//! Web search stage
//!
//! Fetches ranked results for a topic and flattens them into the text block
//! handed to the outline prompt.

mod duckduckgo;
mod format;
mod provider;

pub use duckduckgo::DuckDuckGoBackend;
pub use format::format_results;
pub use provider::{
    build_backend, SearchBackend, SearchProvider, SearchResultItem, DEFAULT_MAX_RESULTS,
};
