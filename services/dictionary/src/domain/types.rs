use chrono::{DateTime, Utc};
use serde::Serialize;

use wordbook_domain::history::preview_definition;
use wordbook_domain::id::UserId;
use wordbook_domain::language::Language;

/// Marker that starts every failed-lookup message shown to callers.
pub const LOOKUP_ERROR_PREFIX: &str = "查詢時發生錯誤";

/// Registered account as read from the user store.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// PHC string. Never logged or returned to clients.
    pub password_hash: String,
    pub display_name: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Display name, or the username when none was set.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

/// Account about to be inserted. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: Option<String>,
}

/// Stored lookup result, unique per (word, language, user_id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub id: i32,
    pub word: String,
    pub language: Language,
    pub definition: String,
    pub query_times: i32,
    /// `None` for anonymous lookups.
    pub user_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// History view of a [`WordRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub word: String,
    pub language: Language,
    pub query_times: i32,
    /// First 200 characters, `...` appended when cut.
    pub definition: String,
    #[serde(rename = "updated_on", serialize_with = "wordbook_core::serde::to_minute")]
    pub updated_at: DateTime<Utc>,
}

impl From<WordRecord> for HistoryEntry {
    fn from(record: WordRecord) -> Self {
        Self {
            definition: preview_definition(&record.definition),
            word: record.word,
            language: record.language,
            query_times: record.query_times,
            updated_at: record.updated_at,
        }
    }
}

/// Result of asking the definition provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionOutcome {
    Found(String),
    /// Provider failure description. Never persisted.
    Failed(String),
}

impl DefinitionOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Text shown to the caller. Failures carry [`LOOKUP_ERROR_PREFIX`].
    pub fn into_text(self) -> String {
        match self {
            Self::Found(text) => text,
            Self::Failed(reason) => format!("{LOOKUP_ERROR_PREFIX}: {reason}"),
        }
    }
}

/// Failure reported by a [`DefinitionProvider`](crate::domain::repository::DefinitionProvider).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("request failed: {0}")]
    Http(String),
    #[error("empty response")]
    EmptyResponse,
}
