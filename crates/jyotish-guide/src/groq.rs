//! OpenAI-compatible chat completions client (Groq by default)

use crate::error::ProviderError;
use crate::provider::{GenerationProvider, GenerationRequest};
use async_trait::async_trait;
use jyotish_core::ProviderConfig;
use std::time::Duration;

const PROVIDER_NAME: &str = "groq";
const MAX_ERROR_BODY_CHARS: usize = 500;

#[derive(Debug, Clone)]
pub struct GroqClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GroqClient {
    pub fn new(api_key: impl Into<String>, config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: config.model.clone(),
        })
    }

    /// `None` when no API key is configured or the HTTP client cannot be built
    pub fn from_config(config: &ProviderConfig) -> Option<Self> {
        let api_key = config.api_key.as_deref()?;
        match Self::new(api_key, config) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!(error = %e, "could not build provider client");
                None
            }
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, request: &GenerationRequest) -> serde_json::Value {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        messages.push(serde_json::json!({"role": "system", "content": request.system_prompt}));
        for m in &request.messages {
            messages.push(serde_json::json!({"role": m.role.as_str(), "content": m.content}));
        }

        serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        })
    }
}

#[async_trait]
impl GenerationProvider for GroqClient {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(
            model = %self.model,
            messages = request.messages.len(),
            "requesting completion"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(request))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        parse_completion(&body)
    }
}

/// Pull `choices[0].message.content` out of a completion body
fn parse_completion(body: &str) -> Result<String, ProviderError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

    let choices = value["choices"]
        .as_array()
        .ok_or_else(|| ProviderError::Malformed("missing choices".to_string()))?;

    let text = choices
        .first()
        .and_then(|c| c["message"]["content"].as_str())
        .unwrap_or("");

    if text.trim().is_empty() {
        return Err(ProviderError::EmptyResponse);
    }
    Ok(text.to_string())
}
