//! Mock session helpers for integration tests.
//!
//! Signs a real session token with the test secret so requests pass through the same
//! cookie extractor as production traffic.

use axum_extra::extract::cookie::Cookie;

use wordbook_domain::id::UserId;
use wordbook_session::cookie::SESSION_COOKIE;
use wordbook_session::token::issue_session_token;

/// Secret shared by test routers and [`MockSession`].
pub const TEST_SECRET: &str = "wordbook-test-secret";

/// Logged-in identity injected into test requests.
pub struct MockSession {
    pub user_id: UserId,
    secret: String,
}

impl MockSession {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self::with_secret(user_id, TEST_SECRET)
    }

    pub fn with_secret(user_id: impl Into<UserId>, secret: &str) -> Self {
        Self {
            user_id: user_id.into(),
            secret: secret.to_owned(),
        }
    }

    /// Session cookie as `name=token`.
    pub fn cookie(&self) -> Cookie<'static> {
        let token = issue_session_token(self.user_id, &self.secret).unwrap();
        Cookie::new(SESSION_COOKIE, token)
    }
}
