use chrono::{DateTime, Utc};
use jyotish_core::ZodiacSign;
use jyotish_history::{ChatTurn, Role};
use serde::{Deserialize, Serialize};

/// One entry of a conversation sent to the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

impl From<ChatTurn> for ChatMessage {
    fn from(turn: ChatTurn) -> Self {
        Self {
            role: turn.role,
            content: turn.content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuidanceSource {
    Ai,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guidance {
    pub message: String,
    pub generated_at: DateTime<Utc>,
    pub zodiac_sign: ZodiacSign,
    pub source: GuidanceSource,
    /// Provider name on success, "curated" on fallback
    pub provider: String,
    pub rag_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl Guidance {
    pub fn is_fallback(&self) -> bool {
        self.source == GuidanceSource::Fallback
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub role: Role,
    pub content: String,
    /// Provider name on success, "fallback" otherwise
    pub provider: String,
    pub rag_enabled: bool,
}
