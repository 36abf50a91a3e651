use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{Settings, API_KEY_ENV};
use crate::llm::client::{OutlineGenerator, OutlineRequest};
use crate::llm::prompts::{build_outline_prompt, system_instruction};
use crate::locale::Locale;
use crate::slide::SlideOutline;
use crate::{Result, SlideError};

const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Chat-completions client that asks for a JSON-only reply.
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
    locale: Locale,
}

impl OpenAiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(SlideError::Config(format!(
                "OpenAI API key is missing. Set {API_KEY_ENV} in the environment or a .env file, \
                 or llm.api_key in the config file."
            )));
        }

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_OPENAI_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_OPENAI_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(settings.llm.timeout_secs.max(1)))
                .build()
                .map_err(|e| {
                    SlideError::Config(format!("Failed to build OpenAI HTTP client: {e}"))
                })?,
            api_key,
            model,
            endpoint,
            locale: settings.slide.locale,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl OutlineGenerator for OpenAiClient {
    async fn generate(&self, request: OutlineRequest<'_>) -> Result<SlideOutline> {
        let prompt = build_outline_prompt(request.topic, request.search_text, self.locale);

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_instruction(self.locale),
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        tracing::debug!(model = %self.model, "Requesting outline");

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SlideError::Generation(format!("OpenAI request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SlideError::Generation(format!(
                "OpenAI returned {status}: {detail}"
            )));
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| SlideError::Generation(format!("Failed to parse OpenAI response: {e}")))?;

        let content = payload
            .choices
            .into_iter()
            .find_map(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| {
                SlideError::Generation("OpenAI response did not contain outline content".to_string())
            })?;

        SlideOutline::from_json(&content)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_key() -> Settings {
        let mut settings = Settings::default();
        settings.llm.api_key = "sk-test".to_string();
        settings
    }

    #[test]
    fn endpoint_override_drops_trailing_slash() {
        let mut settings = settings_with_key();
        settings.llm.endpoint = "http://localhost:8080/v1/".to_string();

        let client = OpenAiClient::from_settings(&settings).unwrap();
        assert_eq!(client.request_url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn blank_model_falls_back_to_default() {
        let mut settings = settings_with_key();
        settings.llm.model = "  ".to_string();

        let client = OpenAiClient::from_settings(&settings).unwrap();
        assert_eq!(client.model, DEFAULT_OPENAI_MODEL);
    }

    #[test]
    fn request_uses_json_response_mode() {
        let body = ChatCompletionRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["messages"][0]["role"], "user");
    }

    #[test]
    fn response_content_is_extracted() {
        let payload: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "{\"a\": 1}"}}]}"#,
        )
        .unwrap();

        assert_eq!(
            payload.choices[0].message.content.as_deref(),
            Some("{\"a\": 1}")
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_generation_error() {
        let mut settings = settings_with_key();
        settings.llm.endpoint = "http://127.0.0.1:9".to_string();
        settings.llm.timeout_secs = 2;

        let client = OpenAiClient::from_settings(&settings).unwrap();
        let err = client
            .generate(OutlineRequest {
                topic: "rust",
                search_text: "results",
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SlideError::Generation(_)));
    }
}
