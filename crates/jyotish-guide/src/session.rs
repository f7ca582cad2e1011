use crate::error::ChatError;
use crate::orchestrator::Orchestrator;
use crate::types::{ChatMessage, ChatReply};
use chrono::{DateTime, Utc};
use jyotish_core::{HistoryConfig, UserContext};
use jyotish_history::{ChatHistory, HistoryPage, Role};
use std::sync::Arc;

/// Chat turns persisted per user around the orchestrator
pub struct ChatService {
    orchestrator: Arc<Orchestrator>,
    history: Arc<ChatHistory>,
    config: HistoryConfig,
}

impl ChatService {
    pub fn new(
        orchestrator: Arc<Orchestrator>,
        history: Arc<ChatHistory>,
        config: HistoryConfig,
    ) -> Self {
        Self {
            orchestrator,
            history,
            config,
        }
    }

    /// Store `message`, reply using the recent window, store the reply.
    ///
    /// Only validation and storage can fail; generation problems come back
    /// as a fallback reply.
    pub async fn send(&self, user: &UserContext, message: &str) -> Result<ChatReply, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        let owner = user.owner_id();

        self.history
            .append(owner, Role::User, message)
            .map_err(ChatError::storage)?;

        let conversation: Vec<ChatMessage> = self
            .history
            .recent(owner, self.config.context_window)
            .map_err(ChatError::storage)?
            .into_iter()
            .map(ChatMessage::from)
            .collect();

        let reply = self.orchestrator.chat(&conversation, user).await;

        self.history
            .append(owner, Role::Assistant, &reply.content)
            .map_err(ChatError::storage)?;
        Ok(reply)
    }

    /// A page of past turns, oldest first; `limit` defaults to the configured page size
    pub fn history(
        &self,
        owner_id: &str,
        limit: Option<usize>,
        before: Option<DateTime<Utc>>,
    ) -> Result<HistoryPage, ChatError> {
        self.history
            .page(owner_id, limit.unwrap_or(self.config.page_size), before)
            .map_err(ChatError::storage)
    }

    pub fn clear(&self, owner_id: &str) -> Result<usize, ChatError> {
        self.history.clear(owner_id).map_err(ChatError::storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::provider::{GenerationProvider, GenerationRequest};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use jyotish_core::{ProviderConfig, RetrievalConfig};
    use jyotish_index::KnowledgeRetriever;
    use std::sync::Mutex;

    /// Echoes how many messages it was shown
    struct CountingProvider {
        seen: Mutex<Vec<usize>>,
    }

    #[async_trait]
    impl GenerationProvider for CountingProvider {
        fn name(&self) -> &str {
            "counting"
        }

        async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
            self.seen.lock().unwrap().push(request.messages.len());
            Ok(format!("seen {}", request.messages.len()))
        }
    }

    fn service(provider: Option<Box<dyn GenerationProvider>>, window: usize) -> ChatService {
        let retriever = Arc::new(KnowledgeRetriever::new(&RetrievalConfig::default()));
        let orchestrator = Orchestrator::new(retriever, provider, ProviderConfig::default());
        ChatService::new(
            Arc::new(orchestrator),
            Arc::new(ChatHistory::open_in_memory().unwrap()),
            HistoryConfig {
                context_window: window,
                page_size: 50,
            },
        )
    }

    fn user(id: &str) -> UserContext {
        UserContext::new("Asha", NaiveDate::from_ymd_opt(1990, 4, 2).unwrap(), "Pune")
            .unwrap()
            .with_id(id)
    }

    #[tokio::test]
    async fn test_empty_message_rejected() {
        let s = service(None, 10);
        let err = s.send(&user("u1"), "   ").await.unwrap_err();
        assert!(matches!(err, ChatError::EmptyMessage));
        assert!(s.history("u1", None, None).unwrap().messages.is_empty());
    }

    #[tokio::test]
    async fn test_send_stores_both_turns() {
        let s = service(None, 10);
        let u = user("u1");
        let reply = s.send(&u, "  Hello there  ").await.unwrap();
        assert_eq!(reply.provider, "fallback");

        let page = s.history("u1", None, None).unwrap();
        assert_eq!(page.messages.len(), 2);
        assert_eq!(page.messages[0].role, Role::User);
        assert_eq!(page.messages[0].content, "Hello there");
        assert_eq!(page.messages[1].role, Role::Assistant);
        assert_eq!(page.messages[1].content, reply.content);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_conversation_capped_to_window() {
        let provider = CountingProvider {
            seen: Mutex::new(Vec::new()),
        };
        let s = service(Some(Box::new(provider)), 3);
        let u = user("u1");

        assert_eq!(s.send(&u, "one").await.unwrap().content, "seen 1");
        assert_eq!(s.send(&u, "two").await.unwrap().content, "seen 3");
        assert_eq!(s.send(&u, "three").await.unwrap().content, "seen 3");
    }

    #[tokio::test]
    async fn test_clear_is_per_user() {
        let s = service(None, 10);
        s.send(&user("u1"), "hi").await.unwrap();
        s.send(&user("u2"), "hey").await.unwrap();

        assert_eq!(s.clear("u1").unwrap(), 2);
        assert!(s.history("u1", None, None).unwrap().messages.is_empty());
        assert_eq!(s.history("u2", None, None).unwrap().messages.len(), 2);
    }

    #[tokio::test]
    async fn test_history_limit_reports_more() {
        let s = service(None, 10);
        let u = user("u1");
        s.send(&u, "first").await.unwrap();
        s.send(&u, "second").await.unwrap();

        let page = s.history("u1", Some(3), None).unwrap();
        assert_eq!(page.messages.len(), 3);
        assert!(page.has_more);
        let everything = s.history("u1", None, None).unwrap();
        assert_eq!(page.messages[0].content, everything.messages[1].content);
    }
}
