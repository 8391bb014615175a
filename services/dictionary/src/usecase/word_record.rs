use wordbook_domain::history::HistoryLimit;
use wordbook_domain::id::UserId;
use wordbook_domain::language::Language;

use crate::domain::repository::WordRecordRepository;
use crate::domain::types::{HistoryEntry, WordRecord};
use crate::error::DictionaryError;

// ── SaveWordRecord ───────────────────────────────────────────────────────────

pub struct SaveWordRecordUseCase<R: WordRecordRepository> {
    pub repo: R,
}

impl<R: WordRecordRepository> SaveWordRecordUseCase<R> {
    /// Upsert the record. Store failures are logged and reported as `false`.
    pub async fn execute(
        &self,
        word: &str,
        language: Language,
        definition: &str,
        user_id: Option<UserId>,
    ) -> bool {
        match self.repo.upsert(word, language, definition, user_id).await {
            Ok(record) => {
                tracing::debug!(
                    record_id = record.id,
                    query_times = record.query_times,
                    "word record saved"
                );
                true
            }
            Err(e) => {
                tracing::error!(error = ?e, %language, "failed to save word record");
                false
            }
        }
    }
}

// ── GetQueryHistory ──────────────────────────────────────────────────────────

pub struct GetQueryHistoryUseCase<R: WordRecordRepository> {
    pub repo: R,
}

impl<R: WordRecordRepository> GetQueryHistoryUseCase<R> {
    /// At most `limit` most-queried records of exactly `user_id`. Store failures yield an
    /// empty list.
    pub async fn execute(&self, user_id: Option<UserId>, limit: HistoryLimit) -> Vec<HistoryEntry> {
        match self.repo.ranked(user_id, limit).await {
            Ok(records) => records.into_iter().map(HistoryEntry::from).collect(),
            Err(e) => {
                tracing::error!(error = ?e, "failed to load query history");
                Vec::new()
            }
        }
    }
}

// ── ListUserWords ────────────────────────────────────────────────────────────

pub struct ListUserWordsUseCase<R: WordRecordRepository> {
    pub repo: R,
}

impl<R: WordRecordRepository> ListUserWordsUseCase<R> {
    pub async fn execute(&self, user_id: UserId) -> Result<Vec<WordRecord>, DictionaryError> {
        self.repo
            .list_by_user(user_id)
            .await
            .map_err(|e| e.or_generic(DictionaryError::HistoryUnavailable, "list user words"))
    }
}
