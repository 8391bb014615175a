use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use wordbook_domain::history::HistoryLimit;
use wordbook_session::MaybeSession;

use crate::domain::types::HistoryEntry;
use crate::state::AppState;
use crate::usecase::word_record::GetQueryHistoryUseCase;

#[derive(Deserialize, Default)]
pub struct HistoryQuery {
    pub limit: Option<u64>,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}

// ── GET /history ─────────────────────────────────────────────────────────────

pub async fn get_history(
    session: MaybeSession,
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<HistoryResponse> {
    let limit = query
        .limit
        .map(|n| HistoryLimit(n).clamped())
        .unwrap_or_default();
    let usecase = GetQueryHistoryUseCase {
        repo: state.word_record_repo(),
    };
    let history = usecase.execute(session.user_id(), limit).await;
    Json(HistoryResponse { history })
}
