//! Daily guidance and chat: provider generation with curated fallbacks

mod error;
mod fallback;
mod groq;
mod orchestrator;
mod prompts;
mod provider;
mod session;
mod types;

pub use error::{ChatError, ProviderError};
pub use fallback::{chat_fallback, curated_guidance, FALLBACK_NOTICE};
pub use groq::GroqClient;
pub use orchestrator::Orchestrator;
pub use provider::{GenerationProvider, GenerationRequest};
pub use session::ChatService;
pub use types::{ChatMessage, ChatReply, Guidance, GuidanceSource};
