use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use wordbook_domain::language::Language;
use wordbook_session::MaybeSession;

use crate::domain::types::WordRecord;
use crate::error::DictionaryError;
use crate::state::AppState;
use crate::usecase::user::GetCurrentUserUseCase;
use crate::usecase::word_record::ListUserWordsUseCase;

// ── GET /user/info ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserInfo {
    pub username: String,
    pub display_name: String,
    pub email: String,
    #[serde(serialize_with = "wordbook_core::serde::to_rfc3339_ms_opt")]
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub struct UserInfoResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
}

pub async fn get_user_info(
    session: MaybeSession,
    State(state): State<AppState>,
) -> Result<Json<UserInfoResponse>, DictionaryError> {
    let usecase = GetCurrentUserUseCase {
        users: state.user_repo(),
    };
    let user = usecase.execute(session.user_id()).await?.map(|user| UserInfo {
        display_name: user.display_name().to_owned(),
        username: user.username,
        email: user.email,
        last_login: user.last_login,
    });
    Ok(Json(UserInfoResponse {
        authenticated: user.is_some(),
        user,
    }))
}

// ── GET /user/words ──────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserWord {
    pub word: String,
    pub language: Language,
    pub query_times: i32,
    pub definition: String,
    #[serde(serialize_with = "wordbook_core::serde::to_minute")]
    pub created_on: DateTime<Utc>,
    #[serde(serialize_with = "wordbook_core::serde::to_minute")]
    pub updated_on: DateTime<Utc>,
}

impl From<WordRecord> for UserWord {
    fn from(record: WordRecord) -> Self {
        Self {
            word: record.word,
            language: record.language,
            query_times: record.query_times,
            definition: record.definition,
            created_on: record.created_at,
            updated_on: record.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct UserWordsResponse {
    pub words: Vec<UserWord>,
}

pub async fn get_user_words(
    session: MaybeSession,
    State(state): State<AppState>,
) -> Result<Json<UserWordsResponse>, DictionaryError> {
    let user_id = session.user_id().ok_or(DictionaryError::Unauthorized)?;
    let usecase = ListUserWordsUseCase {
        repo: state.word_record_repo(),
    };
    let words = usecase
        .execute(user_id)
        .await?
        .into_iter()
        .map(UserWord::from)
        .collect();
    Ok(Json(UserWordsResponse { words }))
}
