//! Per-user chat history backed by SQLite

mod store;
mod types;

pub use store::ChatHistory;
pub use types::{ChatTurn, HistoryPage, Role};
