#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use wordbook_domain::history::HistoryLimit;
use wordbook_domain::id::UserId;
use wordbook_domain::language::Language;

use crate::domain::types::{NewUser, ProviderError, User, WordRecord};
use crate::error::DictionaryError;

/// Repository for accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DictionaryError>;

    /// Exact, case-sensitive match.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DictionaryError>;

    /// Exact, case-sensitive match.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DictionaryError>;

    /// Insert a new account. A uniqueness race surfaces as `UsernameTaken` / `EmailTaken`.
    async fn create(&self, user: &NewUser) -> Result<User, DictionaryError>;

    async fn record_login(&self, id: UserId, at: DateTime<Utc>) -> Result<(), DictionaryError>;

    /// Toggle the active flag. Returns `false` if no such username.
    async fn set_active(&self, username: &str, active: bool) -> Result<bool, DictionaryError>;

    /// All accounts in creation order.
    async fn list(&self) -> Result<Vec<User>, DictionaryError>;
}

/// Repository for looked-up words.
pub trait WordRecordRepository: Send + Sync {
    /// Insert the (word, language, user_id) record with `query_times = 1`, or bump the
    /// existing one: `query_times + 1`, new definition, fresh `updated_at`.
    async fn upsert(
        &self,
        word: &str,
        language: Language,
        definition: &str,
        user_id: Option<UserId>,
    ) -> Result<WordRecord, DictionaryError>;

    async fn find(
        &self,
        word: &str,
        language: Language,
        user_id: Option<UserId>,
    ) -> Result<Option<WordRecord>, DictionaryError>;

    /// Records of exactly `user_id` (`None` = anonymous only), most queried first.
    async fn ranked(
        &self,
        user_id: Option<UserId>,
        limit: HistoryLimit,
    ) -> Result<Vec<WordRecord>, DictionaryError>;

    /// Every record owned by `user_id`, most recently updated first.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<WordRecord>, DictionaryError>;
}

/// Text generator answering rendered prompts.
#[async_trait::async_trait]
pub trait DefinitionProvider: Send + Sync {
    async fn fetch_definition(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// One-way password hashing.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, DictionaryError>;

    /// `false` on mismatch or when `hash` cannot be parsed.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

impl<T: WordRecordRepository> WordRecordRepository for &T {
    async fn upsert(
        &self,
        word: &str,
        language: Language,
        definition: &str,
        user_id: Option<UserId>,
    ) -> Result<WordRecord, DictionaryError> {
        (**self).upsert(word, language, definition, user_id).await
    }

    async fn find(
        &self,
        word: &str,
        language: Language,
        user_id: Option<UserId>,
    ) -> Result<Option<WordRecord>, DictionaryError> {
        (**self).find(word, language, user_id).await
    }

    async fn ranked(
        &self,
        user_id: Option<UserId>,
        limit: HistoryLimit,
    ) -> Result<Vec<WordRecord>, DictionaryError> {
        (**self).ranked(user_id, limit).await
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<WordRecord>, DictionaryError> {
        (**self).list_by_user(user_id).await
    }
}
