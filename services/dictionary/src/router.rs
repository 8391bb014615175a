use axum::{
    Router,
    routing::{get, post},
};

use wordbook_core::health::healthz;
use wordbook_core::middleware::with_request_tracing;

use crate::handlers::{
    auth::{login, logout, register},
    health::readyz,
    history::get_history,
    lookup::lookup_word,
    user::{get_user_info, get_user_words},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Lookup
        .route("/lookup", post(lookup_word))
        .route("/history", get(get_history))
        // Accounts
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/user/info", get(get_user_info))
        .route("/user/words", get(get_user_words))
        .with_state(state);
    with_request_tracing(router)
}
