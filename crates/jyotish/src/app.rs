use jyotish_core::{Config, Paths};
use jyotish_guide::{ChatService, Orchestrator};
use jyotish_history::ChatHistory;
use jyotish_index::KnowledgeRetriever;
use std::sync::Arc;

/// Loaded configuration plus the services commands are built from
pub struct App {
    pub paths: Paths,
    pub config: Config,
}

impl App {
    pub fn load() -> anyhow::Result<Self> {
        let paths = Paths::new()?;
        let config = Config::load(&paths.config_file());
        Ok(Self { paths, config })
    }

    pub fn retriever(&self) -> Arc<KnowledgeRetriever> {
        Arc::new(KnowledgeRetriever::new(&self.config.retrieval))
    }

    pub fn orchestrator(&self) -> Orchestrator {
        Orchestrator::from_config(self.retriever(), &self.config.provider)
    }

    pub fn history(&self) -> anyhow::Result<Arc<ChatHistory>> {
        Ok(Arc::new(ChatHistory::new(&self.paths.history_db())?))
    }

    pub fn chat_service(&self) -> anyhow::Result<ChatService> {
        Ok(ChatService::new(
            Arc::new(self.orchestrator()),
            self.history()?,
            self.config.history.clone(),
        ))
    }
}
