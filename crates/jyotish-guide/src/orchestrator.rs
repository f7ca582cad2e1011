//! Guidance and chat orchestration.
//!
//! Each request either reaches the provider with retrieved context or
//! degrades to a curated or templated response. Provider failures are
//! logged and never surfaced to the caller.

use crate::error::ProviderError;
use crate::fallback::{chat_fallback, curated_guidance, FALLBACK_NOTICE};
use crate::groq::GroqClient;
use crate::prompts::{
    chat_system_prompt, daily_guidance_prompt, guidance_query, GUIDANCE_SYSTEM_PROMPT,
};
use crate::provider::{GenerationProvider, GenerationRequest};
use crate::types::{ChatMessage, ChatReply, Guidance, GuidanceSource};
use chrono::{DateTime, Utc};
use jyotish_core::{ProviderConfig, UserContext, ZodiacSign};
use jyotish_history::Role;
use jyotish_index::{ContextTags, KnowledgeRetriever};
use std::sync::Arc;

const CURATED_PROVIDER: &str = "curated";
const FALLBACK_PROVIDER: &str = "fallback";
const CHAT_TOPIC: &str = "chat";

pub struct Orchestrator {
    retriever: Arc<KnowledgeRetriever>,
    provider: Option<Box<dyn GenerationProvider>>,
    config: ProviderConfig,
}

impl Orchestrator {
    pub fn new(
        retriever: Arc<KnowledgeRetriever>,
        provider: Option<Box<dyn GenerationProvider>>,
        config: ProviderConfig,
    ) -> Self {
        Self {
            retriever,
            provider,
            config,
        }
    }

    /// Resolve the provider once from configuration
    pub fn from_config(retriever: Arc<KnowledgeRetriever>, config: &ProviderConfig) -> Self {
        let provider = GroqClient::from_config(config)
            .map(|client| Box::new(client) as Box<dyn GenerationProvider>);
        match &provider {
            Some(p) => {
                tracing::info!(provider = p.name(), model = %config.model, "generation provider ready")
            }
            None => tracing::info!("no API key configured, using curated responses"),
        }
        Self::new(retriever, provider, config.clone())
    }

    pub fn retriever(&self) -> &Arc<KnowledgeRetriever> {
        &self.retriever
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider().ok().map(|p| p.name())
    }

    /// The configured provider, or [`ProviderError::Unavailable`]
    pub fn provider(&self) -> Result<&dyn GenerationProvider, ProviderError> {
        self.provider.as_deref().ok_or(ProviderError::Unavailable)
    }

    pub async fn daily_guidance(&self, sign: ZodiacSign, name: Option<&str>) -> Guidance {
        self.daily_guidance_at(sign, name, Utc::now()).await
    }

    pub async fn daily_guidance_at(
        &self,
        sign: ZodiacSign,
        name: Option<&str>,
        now: DateTime<Utc>,
    ) -> Guidance {
        let provider = match self.provider() {
            Ok(provider) => provider,
            Err(e) => {
                tracing::debug!(reason = %e, "serving curated guidance");
                return curated(sign, now);
            }
        };

        let context = self
            .retriever
            .build_prompt_context(&guidance_query(sign), None);
        let request = GenerationRequest {
            system_prompt: GUIDANCE_SYSTEM_PROMPT.to_string(),
            messages: vec![ChatMessage::user(daily_guidance_prompt(
                name,
                sign,
                now.date_naive(),
                &context,
            ))],
            temperature: self.config.guidance_temperature,
            max_tokens: self.config.guidance_max_tokens,
        };

        match generate(provider, &request).await {
            Ok(message) => Guidance {
                message,
                generated_at: now,
                zodiac_sign: sign,
                source: GuidanceSource::Ai,
                provider: provider.name().to_string(),
                rag_enabled: true,
                notice: None,
            },
            Err(e) => {
                tracing::warn!(provider = provider.name(), error = %e, "guidance generation failed");
                curated(sign, now)
            }
        }
    }

    /// Reply to the latest turn of `conversation`.
    ///
    /// On success the latest user message is remembered as user context
    /// for later retrieval; fallbacks leave the retriever untouched.
    pub async fn chat(&self, conversation: &[ChatMessage], user: &UserContext) -> ChatReply {
        let provider = match self.provider() {
            Ok(provider) => provider,
            Err(e) => {
                tracing::debug!(reason = %e, "serving templated reply");
                return templated(user);
            }
        };

        let last_user_message = conversation
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str());

        let context = last_user_message
            .map(|q| self.retriever.build_prompt_context(q, Some(user)))
            .unwrap_or_default();

        let request = GenerationRequest {
            system_prompt: chat_system_prompt(user, &context),
            messages: conversation.to_vec(),
            temperature: self.config.chat_temperature,
            max_tokens: self.config.chat_max_tokens,
        };

        match generate(provider, &request).await {
            Ok(content) => {
                if let Some(question) = last_user_message {
                    self.retriever.add_context(
                        user.owner_id(),
                        &format!("User asked: {}", question),
                        ContextTags {
                            sign: Some(user.zodiac_sign),
                            topic: Some(CHAT_TOPIC.to_string()),
                        },
                    );
                }
                ChatReply {
                    role: Role::Assistant,
                    content,
                    provider: provider.name().to_string(),
                    rag_enabled: true,
                }
            }
            Err(e) => {
                tracing::warn!(provider = provider.name(), error = %e, "chat generation failed");
                templated(user)
            }
        }
    }
}

/// Blank output counts as a failure. Chat then takes the templated reply
/// and remembers nothing, unlike a plain pass-through of the empty text.
async fn generate(
    provider: &dyn GenerationProvider,
    request: &GenerationRequest,
) -> Result<String, ProviderError> {
    let text = provider.generate(request).await?;
    if text.trim().is_empty() {
        return Err(ProviderError::EmptyResponse);
    }
    Ok(text)
}

fn curated(sign: ZodiacSign, now: DateTime<Utc>) -> Guidance {
    Guidance {
        message: curated_guidance(sign).to_string(),
        generated_at: now,
        zodiac_sign: sign,
        source: GuidanceSource::Fallback,
        provider: CURATED_PROVIDER.to_string(),
        rag_enabled: false,
        notice: Some(FALLBACK_NOTICE.to_string()),
    }
}

fn templated(user: &UserContext) -> ChatReply {
    ChatReply {
        role: Role::Assistant,
        content: chat_fallback(user),
        provider: FALLBACK_PROVIDER.to_string(),
        rag_enabled: false,
    }
}
