//! KnowledgeRetriever: fixed corpus plus a bounded user-context buffer

use crate::corpus::seed_documents;
use crate::document::{Category, ContextTags, KnowledgeDocument, ScoredDocument};
use crate::score::{score, PreparedQuery};
use chrono::Utc;
use jyotish_core::{RetrievalConfig, UserContext};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

const CONTEXT_HEADER: &str = "RELEVANT ASTROLOGY KNOWLEDGE (from vector database):";
const CONTEXT_FOOTER: &str = "Use this knowledge to provide accurate, contextual responses.";
const CONTEXT_KEYWORD_LIMIT: usize = 10;
const CONTEXT_KEYWORD_MIN_CHARS: usize = 3;

#[derive(Debug)]
struct Entry {
    doc: Arc<KnowledgeDocument>,
    text_lower: String,
}

impl Entry {
    fn new(doc: KnowledgeDocument) -> Self {
        let text_lower = doc.text.to_lowercase();
        Self {
            doc: Arc::new(doc),
            text_lower,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RetrieverStats {
    pub seeded_documents: usize,
    pub user_context_documents: usize,
    pub user_context_capacity: usize,
}

#[derive(Debug)]
pub struct KnowledgeRetriever {
    seeded: Vec<Entry>,
    user_context: RwLock<VecDeque<Entry>>,
    capacity: usize,
    max_results: usize,
    next_seq: AtomicU64,
}

impl KnowledgeRetriever {
    /// Retriever over the built-in astrology knowledge base
    pub fn new(config: &RetrievalConfig) -> Self {
        Self::with_documents(seed_documents(), config)
    }

    pub fn with_documents(documents: Vec<KnowledgeDocument>, config: &RetrievalConfig) -> Self {
        tracing::debug!(documents = documents.len(), "knowledge base seeded");
        Self {
            seeded: documents.into_iter().map(Entry::new).collect(),
            user_context: RwLock::new(VecDeque::new()),
            capacity: config.user_context_capacity,
            max_results: config.max_results,
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.seeded.len() + self.user_context_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn user_context_len(&self) -> usize {
        self.user_context
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn stats(&self) -> RetrieverStats {
        RetrieverStats {
            seeded_documents: self.seeded.len(),
            user_context_documents: self.user_context_len(),
            user_context_capacity: self.capacity,
        }
    }

    /// Rank documents by keyword overlap with `text`.
    ///
    /// Only positive scores are returned, best first. Equal scores keep
    /// corpus order: seeded documents, then user context oldest first.
    pub fn query(&self, text: &str, max_results: usize) -> Vec<ScoredDocument> {
        let query = PreparedQuery::new(text);
        let user_context = self
            .user_context
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        let mut scored: Vec<ScoredDocument> = self
            .seeded
            .iter()
            .chain(user_context.iter())
            .filter_map(|entry| {
                let s = score(&query, &entry.doc.keywords, &entry.text_lower);
                (s > 0.0).then(|| ScoredDocument {
                    document: Arc::clone(&entry.doc),
                    score: s,
                })
            })
            .collect();
        drop(user_context);

        // sort_by is stable, which the tie-break relies on
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(max_results);
        scored
    }

    /// Remember free text from `owner_id` as a user-context document.
    ///
    /// Keywords are the first ten lower-cased tokens longer than three
    /// characters. At capacity the oldest user-context document is evicted.
    pub fn add_context(&self, owner_id: &str, text: &str, tags: ContextTags) {
        if self.capacity == 0 {
            return;
        }

        let keywords: Vec<String> = text
            .to_lowercase()
            .split_whitespace()
            .filter(|w| w.chars().count() > CONTEXT_KEYWORD_MIN_CHARS)
            .take(CONTEXT_KEYWORD_LIMIT)
            .map(String::from)
            .collect();

        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let millis = Utc::now().timestamp_millis();
        let id = format!("user_{}_{}_{}", owner_id, millis, seq);
        let mut doc = KnowledgeDocument::new(id, text, keywords, Category::UserContext);
        doc.sign = tags.sign;
        doc.topic = tags.topic;

        let mut user_context = self
            .user_context
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        while user_context.len() >= self.capacity {
            if let Some(evicted) = user_context.pop_front() {
                tracing::debug!(id = %evicted.doc.id, "evicted user context");
            }
        }
        user_context.push_back(Entry::new(doc));
    }

    /// Context block for prompt augmentation; empty when nothing matches
    pub fn build_prompt_context(&self, query: &str, user: Option<&UserContext>) -> String {
        let hits = self.query(query, self.max_results);
        tracing::debug!(
            hits = hits.len(),
            sign = user.map(|u| u.zodiac_sign.name()),
            "retrieved prompt context"
        );

        if hits.is_empty() {
            return String::new();
        }

        let parts: Vec<String> = hits
            .iter()
            .map(|hit| format!("[{}] {}", hit.document.category.label(), hit.document.text))
            .collect();

        format!(
            "\n{}\n{}\n\n{}\n",
            CONTEXT_HEADER,
            parts.join("\n\n"),
            CONTEXT_FOOTER
        )
    }
}
