use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use wordbook_domain::language::Language;
use wordbook_session::MaybeSession;

use crate::error::DictionaryError;
use crate::state::AppState;
use crate::usecase::lookup::{LookupInput, LookupWordUseCase};

#[derive(Deserialize)]
pub struct LookupRequest {
    #[serde(default)]
    pub word: String,
}

#[derive(Serialize)]
pub struct LookupResponse {
    pub word: String,
    pub language: Language,
    pub definition: String,
}

// ── POST /lookup ─────────────────────────────────────────────────────────────

pub async fn lookup_word(
    session: MaybeSession,
    State(state): State<AppState>,
    Json(body): Json<LookupRequest>,
) -> Result<Json<LookupResponse>, DictionaryError> {
    let usecase = LookupWordUseCase {
        records: state.word_record_repo(),
        provider: state.provider.clone(),
        style: state.prompt_style,
    };
    let output = usecase
        .execute(LookupInput {
            word: body.word,
            user_id: session.user_id(),
        })
        .await?;
    Ok(Json(LookupResponse {
        word: output.word,
        language: output.language,
        definition: output.definition,
    }))
}
