//! webslide - Turn a topic into a single presentation slide
//!
//! Searches the web for the topic, asks an LLM to condense the results into
//! an outline, and renders the outline as a self-contained HTML slide.

pub mod cli;
pub mod config;
pub mod llm;
pub mod locale;
pub mod pipeline;
pub mod search;
pub mod server;
pub mod slide;

use thiserror::Error;

/// Main error type for webslide
#[derive(Error, Debug)]
pub enum SlideError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Search error: {0}")]
    Search(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Outline schema error: {0}")]
    Schema(String),

    #[error("Topic must not be empty")]
    EmptyTopic,
}

pub type Result<T> = std::result::Result<T, SlideError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "webslide";
