//! Knowledge document types

use jyotish_core::{Planet, ZodiacSign};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Zodiac,
    Houses,
    Planets,
    General,
    UserContext,
}

impl Category {
    /// Label used in prompt context blocks
    pub fn label(self) -> &'static str {
        match self {
            Category::Zodiac => "zodiac",
            Category::Houses => "houses",
            Category::Planets => "planets",
            Category::General => "general",
            Category::UserContext => "user_context",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeDocument {
    pub id: String,
    pub text: String,
    pub keywords: Vec<String>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<ZodiacSign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planet: Option<Planet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl KnowledgeDocument {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        keywords: Vec<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            keywords,
            category,
            sign: None,
            house: None,
            planet: None,
            topic: None,
        }
    }
}

/// Optional tags attached to a user-context document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextTags {
    pub sign: Option<ZodiacSign>,
    pub topic: Option<String>,
}

/// A query hit
#[derive(Debug, Clone)]
pub struct ScoredDocument {
    pub document: Arc<KnowledgeDocument>,
    pub score: f64,
}
