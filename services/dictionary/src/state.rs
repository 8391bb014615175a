use std::sync::Arc;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use wordbook_domain::prompt::PromptStyle;
use wordbook_session::SessionSettings;

use crate::domain::repository::DefinitionProvider;
use crate::infra::db::{DbUserRepository, DbWordRecordRepository};
use crate::infra::password::Argon2Hasher;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub provider: Arc<dyn DefinitionProvider>,
    pub session: SessionSettings,
    pub prompt_style: PromptStyle,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn word_record_repo(&self) -> DbWordRecordRepository {
        DbWordRecordRepository {
            db: self.db.clone(),
        }
    }

    pub fn password_hasher(&self) -> Argon2Hasher {
        Argon2Hasher::default()
    }
}

impl FromRef<AppState> for SessionSettings {
    fn from_ref(state: &AppState) -> Self {
        state.session.clone()
    }
}
