use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use wordbook_session::MaybeSession;
use wordbook_session::cookie::{clear_session_cookie, set_session_cookie};
use wordbook_session::token::issue_session_token;

use crate::error::DictionaryError;
use crate::state::AppState;
use crate::usecase::user::{AuthenticateUseCase, LoginInput, RegisterInput, RegisterUseCase};

const REGISTERED: &str = "註冊成功";
const LOGGED_IN: &str = "登入成功";
const LOGGED_OUT: &str = "登出成功";

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ── POST /register ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub display_name: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, DictionaryError> {
    let usecase = RegisterUseCase {
        users: state.user_repo(),
        hasher: state.password_hasher(),
    };
    usecase
        .execute(RegisterInput {
            username: body.username,
            email: body.email,
            password: body.password,
            display_name: body.display_name,
        })
        .await?;
    Ok(Json(MessageResponse {
        message: REGISTERED,
    }))
}

// ── POST /login ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    /// Username or email.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginUser {
    pub username: String,
    pub display_name: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: LoginUser,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, DictionaryError> {
    let usecase = AuthenticateUseCase {
        users: state.user_repo(),
        hasher: state.password_hasher(),
    };
    let user = usecase
        .execute(LoginInput {
            identifier: body.username,
            password: body.password,
        })
        .await?;

    let token = issue_session_token(user.id, &state.session.secret)
        .map_err(|e| DictionaryError::Internal(anyhow::Error::new(e).context("issue session")))?;
    let jar = set_session_cookie(jar, token, state.session.secure_cookie);

    let body = LoginResponse {
        message: LOGGED_IN,
        user: LoginUser {
            display_name: user.display_name().to_owned(),
            username: user.username,
        },
    };
    Ok((jar, Json(body)))
}

// ── POST /logout ─────────────────────────────────────────────────────────────

pub async fn logout(
    session: MaybeSession,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, DictionaryError> {
    let user_id = session.user_id().ok_or(DictionaryError::Unauthorized)?;
    tracing::info!(%user_id, "user logged out");
    let jar = clear_session_cookie(jar, state.session.secure_cookie);
    Ok((
        jar,
        Json(MessageResponse {
            message: LOGGED_OUT,
        }),
    ))
}
