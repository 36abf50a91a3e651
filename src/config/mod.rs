//! Configuration module for webslide
//!
//! Handles loading settings from a TOML file with environment overrides.

mod settings;

pub use settings::{Settings, API_KEY_ENV};
