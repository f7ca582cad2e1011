//! Configuration for retrieval, generation and chat history

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Generation provider settings (OpenAI-compatible chat completions)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API key; absent means no provider and curated fallbacks only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub guidance_temperature: f32,
    pub guidance_max_tokens: u32,
    pub chat_temperature: f32,
    pub chat_max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            guidance_temperature: 0.7,
            guidance_max_tokens: 500,
            chat_temperature: 0.8,
            chat_max_tokens: 400,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Documents spliced into each prompt
    pub max_results: usize,
    /// Retained user-context documents before the oldest is evicted
    pub user_context_capacity: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_results: 3,
            user_context_capacity: 256,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Recent turns sent to the provider as conversation
    pub context_window: usize,
    /// Default page size for history listings
    pub page_size: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            context_window: 10,
            page_size: 50,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub retrieval: RetrievalConfig,
    pub history: HistoryConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `path`, then apply environment overrides.
    ///
    /// A missing or malformed file yields defaults.
    pub fn load(path: &Path) -> Self {
        let mut config = if path.exists() {
            match Self::from_file(path) {
                Ok(c) => c,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring bad config");
                    Self::new()
                }
            }
        } else {
            Self::new()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply `GROQ_API_KEY`, `JYOTISH_MODEL` and `JYOTISH_BASE_URL`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup("GROQ_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.provider.api_key = Some(key.trim().to_string());
        }
        if let Some(model) = lookup("JYOTISH_MODEL").filter(|m| !m.trim().is_empty()) {
            self.provider.model = model;
        }
        if let Some(url) = lookup("JYOTISH_BASE_URL").filter(|u| !u.trim().is_empty()) {
            self.provider.base_url = url.trim_end_matches('/').to_string();
        }
    }

    /// Write as pretty JSON via temp file + rename
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, json)?;
        std::fs::rename(temp_path, path)?;
        Ok(())
    }
}
