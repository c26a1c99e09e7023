use super::types::*;
use crate::{Error, Result, config::ProviderConfig};
use async_trait::async_trait;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Transport to a generative-language backend. `GeminiClient` is the real
/// one; tests substitute their own.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::config("Gemini API key is empty"));
        }

        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            api_key: config.api_key.trim().to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl ChatProvider for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        debug!(
            "Sending generateContent to model {} with {} turns",
            model,
            request.contents.len()
        );

        let response = self
            .http
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(envelope) => envelope.error.message,
                Err(_) => body,
            };
            warn!("Gemini returned {}: {}", status, message);
            return Err(Error::provider(format!("Gemini returned {}: {}", status, message)));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "Gemini usage: prompt={} candidates={} total={}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        Ok(parsed)
    }
}
