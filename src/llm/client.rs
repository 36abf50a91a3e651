use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::openai::OpenAiClient;
use crate::slide::SlideOutline;
use crate::{Result, SlideError};

/// Outline generation request payload.
pub struct OutlineRequest<'a> {
    pub topic: &'a str,
    pub search_text: &'a str,
}

#[async_trait]
pub trait OutlineGenerator: Send + Sync {
    async fn generate(&self, request: OutlineRequest<'_>) -> Result<SlideOutline>;
}

/// Build an outline generator from runtime settings.
pub fn build_generator(settings: &Settings) -> Result<Box<dyn OutlineGenerator>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAiClient::from_settings(settings)?)),
        other => Err(SlideError::Config(format!(
            "Unsupported llm.provider '{}'. Supported providers: openai",
            other
        ))),
    }
}
