//! Shared types, zodiac reference data and configuration

mod config;
mod error;
mod paths;
mod types;
mod zodiac;

pub use config::{Config, HistoryConfig, ProviderConfig, RetrievalConfig};
pub use error::ProfileError;
pub use paths::Paths;
pub use types::{Planet, UserContext, ZodiacSign};
pub use zodiac::{Element, ZodiacProfile};
