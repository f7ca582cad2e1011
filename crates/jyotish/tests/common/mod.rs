#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use jyotish_core::{ProviderConfig, RetrievalConfig, UserContext};
use jyotish_guide::{GenerationProvider, GenerationRequest, Orchestrator, ProviderError};
use jyotish_index::KnowledgeRetriever;
use std::sync::{Arc, Mutex};

pub fn sample_user() -> UserContext {
    let dob = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
    UserContext::new("Asha", dob, "Pune, India")
        .unwrap()
        .with_id("asha-1990")
}

/// Every `step` days from 1900-01-01 to 2099-12-31
pub fn birth_dates(step: i64) -> impl Iterator<Item = NaiveDate> {
    let start = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2099, 12, 31).unwrap();
    (0..)
        .map(move |i| start + Duration::days(i * step))
        .take_while(move |d| *d <= end)
}

pub fn retriever() -> Arc<KnowledgeRetriever> {
    Arc::new(KnowledgeRetriever::new(&RetrievalConfig::default()))
}

pub fn orchestrator(provider: Option<Box<dyn GenerationProvider>>) -> Orchestrator {
    Orchestrator::new(retriever(), provider, ProviderConfig::default())
}

/// Replies from a script, recording every request it receives
pub struct ScriptedProvider {
    replies: Mutex<Vec<Result<String, u16>>>,
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl ScriptedProvider {
    /// Replies are consumed in order; once exhausted every call fails with 503
    pub fn new(replies: Vec<Result<String, u16>>) -> Self {
        let mut replies = replies;
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn always_failing() -> Self {
        Self::new(vec![])
    }
}

#[async_trait]
impl GenerationProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.replies.lock().unwrap().pop() {
            Some(Ok(text)) => Ok(text),
            Some(Err(status)) => Err(ProviderError::Status {
                status,
                body: "scripted failure".to_string(),
            }),
            None => Err(ProviderError::Status {
                status: 503,
                body: "script exhausted".to_string(),
            }),
        }
    }
}
