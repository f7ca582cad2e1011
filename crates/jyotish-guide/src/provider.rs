use crate::error::ProviderError;
use crate::types::ChatMessage;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Text generation backend. A single attempt per call, no retries.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Reported as `provider` on successful responses
    fn name(&self) -> &str;

    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError>;
}
