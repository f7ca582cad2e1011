use crate::types::{ChatTurn, HistoryPage, Role};
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

type RawTurn = (i64, String, String, String, String);

/// Append-only chat log, one row per message.
///
/// Timestamps are stored as fixed-width RFC 3339 UTC strings so they
/// compare correctly as text.
pub struct ChatHistory {
    conn: Mutex<Connection>,
}

impl ChatHistory {
    pub fn new(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let conn = Connection::open(db_path)
            .with_context(|| format!("opening chat history at {}", db_path.display()))?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS chat_messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                role TEXT NOT NULL,
                content TEXT NOT NULL,
                timestamp TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_chat_user ON chat_messages(user_id, id);
            ",
        )?;
        Ok(())
    }

    pub fn append(&self, user_id: &str, role: Role, content: &str) -> Result<ChatTurn> {
        self.append_at(user_id, role, content, Utc::now())
    }

    pub fn append_at(
        &self,
        user_id: &str,
        role: Role,
        content: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<ChatTurn> {
        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        conn.execute(
            "INSERT INTO chat_messages (user_id, role, content, timestamp) VALUES (?1, ?2, ?3, ?4)",
            params![user_id, role.as_str(), content, format_timestamp(timestamp)],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!(user = user_id, id, role = %role, "chat turn stored");

        Ok(ChatTurn {
            id,
            user_id: user_id.to_string(),
            role,
            content: content.to_string(),
            timestamp,
        })
    }

    /// Latest `limit` turns for `user_id`, oldest first
    pub fn recent(&self, user_id: &str, limit: usize) -> Result<Vec<ChatTurn>> {
        Ok(self.page(user_id, limit, None)?.messages)
    }

    /// Up to `limit` turns older than `before`, oldest first.
    ///
    /// `has_more` is set whenever the page came back full.
    pub fn page(
        &self,
        user_id: &str,
        limit: usize,
        before: Option<DateTime<Utc>>,
    ) -> Result<HistoryPage> {
        let max_rows = i64::try_from(limit).unwrap_or(i64::MAX);
        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        let raw: Vec<RawTurn> = match before {
            Some(before) => {
                let mut stmt = conn.prepare(
                    "SELECT id, user_id, role, content, timestamp FROM chat_messages
                     WHERE user_id = ?1 AND timestamp < ?2
                     ORDER BY id DESC LIMIT ?3",
                )?;
                let rows = stmt.query_map(
                    params![user_id, format_timestamp(before), max_rows],
                    raw_turn,
                )?;
                rows.collect::<Result<_, _>>()?
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT id, user_id, role, content, timestamp FROM chat_messages
                     WHERE user_id = ?1
                     ORDER BY id DESC LIMIT ?2",
                )?;
                let rows = stmt.query_map(params![user_id, max_rows], raw_turn)?;
                rows.collect::<Result<_, _>>()?
            }
        };
        drop(conn);

        let mut messages = raw
            .into_iter()
            .map(into_turn)
            .collect::<Result<Vec<_>>>()?;
        messages.reverse();

        Ok(HistoryPage {
            has_more: limit > 0 && messages.len() == limit,
            messages,
        })
    }

    /// Delete every turn for `user_id`, returning how many were removed
    pub fn clear(&self, user_id: &str) -> Result<usize> {
        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        let removed = conn.execute(
            "DELETE FROM chat_messages WHERE user_id = ?1",
            params![user_id],
        )?;
        tracing::info!(user = user_id, removed, "chat history cleared");
        Ok(removed)
    }

    pub fn count(&self, user_id: &str) -> Result<usize> {
        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        let n: i64 = conn.query_row(
            "SELECT COUNT(*) FROM chat_messages WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        )?;
        Ok(n as usize)
    }
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn raw_turn(row: &rusqlite::Row) -> rusqlite::Result<RawTurn> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
}

fn into_turn((id, user_id, role, content, timestamp): RawTurn) -> Result<ChatTurn> {
    Ok(ChatTurn {
        id,
        user_id,
        role: role.parse()?,
        content,
        timestamp: DateTime::parse_from_rfc3339(&timestamp)
            .with_context(|| format!("bad timestamp on chat turn {}", id))?
            .with_timezone(&Utc),
    })
}
