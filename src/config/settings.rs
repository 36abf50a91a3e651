//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::locale::Locale;

/// Environment variable holding the OpenAI credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Web search settings
    #[serde(default)]
    pub search: SearchSettings,

    /// LLM settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Slide rendering settings
    #[serde(default)]
    pub slide: SlideSettings,

    /// Web UI settings
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Search backend (duckduckgo)
    #[serde(default = "default_search_provider")]
    pub provider: String,

    /// Number of results fed to the outline prompt
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Region code passed to the backend (empty = backend default)
    #[serde(default = "default_region")]
    pub region: String,

    /// Backend endpoint override
    #[serde(default)]
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (openai)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key (falls back to OPENAI_API_KEY)
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API endpoint (for compatible/self-hosted gateways)
    #[serde(default)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideSettings {
    /// Brand mark shown in the slide corner (empty = none)
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Language for prompts and generated text
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address the web UI listens on
    #[serde(default = "default_bind")]
    pub bind: String,
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_search_provider() -> String {
    "duckduckgo".to_string()
}

fn default_max_results() -> usize {
    crate::search::DEFAULT_MAX_RESULTS
}

fn default_region() -> String {
    "jp-jp".to_string()
}

fn default_llm_provider() -> String {
    "openai".to_string()
}

fn default_llm_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_brand() -> String {
    "Tech0".to_string()
}

fn default_bind() -> String {
    "127.0.0.1:8501".to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            provider: default_search_provider(),
            max_results: default_max_results(),
            region: default_region(),
            endpoint: String::new(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for SlideSettings {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            locale: Locale::default(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.llm.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                if !key.trim().is_empty() {
                    self.llm.api_key = key;
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "webslide", "webslide")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Result count to request, with 0 meaning the default.
    pub fn effective_max_results(&self) -> usize {
        if self.search.max_results == 0 {
            default_max_results()
        } else {
            self.search.max_results
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_gpt_4o_mini() {
        let settings = Settings::default();
        assert_eq!(settings.llm.model, "gpt-4o-mini");
        assert_eq!(settings.search.max_results, 5);
        assert_eq!(settings.slide.locale, Locale::Ja);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [slide]
            brand = "Acme"

            [search]
            max_results = 0
            "#,
        )
        .unwrap();

        assert_eq!(settings.slide.brand, "Acme");
        assert_eq!(settings.server.bind, "127.0.0.1:8501");
        assert_eq!(settings.effective_max_results(), 5);
    }
}
