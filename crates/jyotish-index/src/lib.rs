//! In-memory keyword retrieval over an astrology knowledge corpus

mod corpus;
mod document;
mod retriever;
mod score;

pub use corpus::seed_documents;
pub use document::{Category, ContextTags, KnowledgeDocument, ScoredDocument};
pub use retriever::{KnowledgeRetriever, RetrieverStats};
