//! In-memory port implementations for use-case tests.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use wordbook_domain::history::HistoryLimit;
use wordbook_domain::id::UserId;
use wordbook_domain::language::Language;

use crate::domain::repository::{
    DefinitionProvider, PasswordHasher, UserRepository, WordRecordRepository,
};
use crate::domain::types::{NewUser, ProviderError, User, WordRecord};
use crate::error::DictionaryError;

fn store_down() -> DictionaryError {
    DictionaryError::Internal(anyhow::anyhow!("store unavailable"))
}

// ── MockRecordRepo ───────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockRecordRepo {
    pub records: Arc<Mutex<Vec<WordRecord>>>,
    pub broken: bool,
}

impl MockRecordRepo {
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Default::default()
        }
    }

    pub fn with(records: Vec<WordRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            broken: false,
        }
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<WordRecord>>> {
        Arc::clone(&self.records)
    }
}

pub fn record(word: &str, query_times: i32, user_id: Option<UserId>) -> WordRecord {
    let now = Utc::now();
    WordRecord {
        id: query_times,
        word: word.to_owned(),
        language: Language::detect(word),
        definition: format!("definition of {word}"),
        query_times,
        user_id,
        created_at: now,
        updated_at: now,
    }
}

impl WordRecordRepository for MockRecordRepo {
    async fn upsert(
        &self,
        word: &str,
        language: Language,
        definition: &str,
        user_id: Option<UserId>,
    ) -> Result<WordRecord, DictionaryError> {
        if self.broken {
            return Err(store_down());
        }
        let mut records = self.records.lock().unwrap();
        let now = Utc::now();
        if let Some(existing) = records
            .iter_mut()
            .find(|r| r.word == word && r.language == language && r.user_id == user_id)
        {
            existing.query_times += 1;
            existing.definition = definition.to_owned();
            existing.updated_at = now;
            return Ok(existing.clone());
        }
        let record = WordRecord {
            id: records.len() as i32 + 1,
            word: word.to_owned(),
            language,
            definition: definition.to_owned(),
            query_times: 1,
            user_id,
            created_at: now,
            updated_at: now,
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn find(
        &self,
        word: &str,
        language: Language,
        user_id: Option<UserId>,
    ) -> Result<Option<WordRecord>, DictionaryError> {
        if self.broken {
            return Err(store_down());
        }
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.word == word && r.language == language && r.user_id == user_id)
            .cloned())
    }

    async fn ranked(
        &self,
        user_id: Option<UserId>,
        limit: HistoryLimit,
    ) -> Result<Vec<WordRecord>, DictionaryError> {
        if self.broken {
            return Err(store_down());
        }
        let mut matching: Vec<WordRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.query_times.cmp(&a.query_times));
        matching.truncate(limit.0 as usize);
        Ok(matching)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<WordRecord>, DictionaryError> {
        if self.broken {
            return Err(store_down());
        }
        let mut owned: Vec<WordRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == Some(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(owned)
    }
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
    pub broken: bool,
}

impl MockUserRepo {
    pub fn with(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            broken: false,
        }
    }

    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Default::default()
        }
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

/// Active user whose stored hash is [`MockHasher`]'s hash of `password`.
pub fn user(id: i32, username: &str, email: &str, password: &str) -> User {
    User {
        id: UserId(id),
        username: username.to_owned(),
        email: email.to_owned(),
        password_hash: MockHasher.hash(password).unwrap(),
        display_name: None,
        is_active: true,
        created_at: Utc::now(),
        last_login: None,
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DictionaryError> {
        if self.broken {
            return Err(store_down());
        }
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DictionaryError> {
        if self.broken {
            return Err(store_down());
        }
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DictionaryError> {
        if self.broken {
            return Err(store_down());
        }
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, new: &NewUser) -> Result<User, DictionaryError> {
        if self.broken {
            return Err(store_down());
        }
        let mut users = self.users.lock().unwrap();
        let user = User {
            id: UserId(users.len() as i32 + 1),
            username: new.username.clone(),
            email: new.email.clone(),
            password_hash: new.password_hash.clone(),
            display_name: new.display_name.clone(),
            is_active: true,
            created_at: Utc::now(),
            last_login: None,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn record_login(&self, id: UserId, at: DateTime<Utc>) -> Result<(), DictionaryError> {
        if self.broken {
            return Err(store_down());
        }
        if let Some(u) = self.users.lock().unwrap().iter_mut().find(|u| u.id == id) {
            u.last_login = Some(at);
        }
        Ok(())
    }

    async fn set_active(&self, username: &str, active: bool) -> Result<bool, DictionaryError> {
        if self.broken {
            return Err(store_down());
        }
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.username == username) {
            Some(u) => {
                u.is_active = active;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self) -> Result<Vec<User>, DictionaryError> {
        if self.broken {
            return Err(store_down());
        }
        Ok(self.users.lock().unwrap().clone())
    }
}

// ── MockHasher ───────────────────────────────────────────────────────────────

/// Reversible stand-in for argon2: `hashed:<password>`.
#[derive(Clone, Copy, Default)]
pub struct MockHasher;

impl PasswordHasher for MockHasher {
    fn hash(&self, password: &str) -> Result<String, DictionaryError> {
        Ok(format!("hashed:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        hash.strip_prefix("hashed:") == Some(password)
    }
}

// ── MockProvider ─────────────────────────────────────────────────────────────

/// Answers every prompt with `reply`, or fails with `error`. Keeps the prompts it saw.
#[derive(Default)]
pub struct MockProvider {
    pub reply: Option<String>,
    pub error: Option<ProviderError>,
    pub prompts: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_owned()),
            ..Default::default()
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }
}

#[async_trait::async_trait]
impl DefinitionProvider for MockProvider {
    async fn fetch_definition(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        match (&self.reply, &self.error) {
            (_, Some(error)) => Err(error.clone()),
            (Some(reply), None) => Ok(reply.clone()),
            (None, None) => Err(ProviderError::EmptyResponse),
        }
    }
}
