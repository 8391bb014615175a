//! Session extractor.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use wordbook_domain::id::UserId;

use crate::cookie::SESSION_COOKIE;
use crate::token::validate_session_token;

/// Signing secret and cookie flags. Expose from the app state with `FromRef`.
#[derive(Clone)]
pub struct SessionSettings {
    pub secret: Arc<str>,
    /// `Secure` attribute on the session cookie.
    pub secure_cookie: bool,
}

impl SessionSettings {
    pub fn new(secret: impl Into<Arc<str>>, secure_cookie: bool) -> Self {
        Self {
            secret: secret.into(),
            secure_cookie,
        }
    }

    /// Identity from the session cookie in `headers`, if present and valid.
    pub fn identity_from_headers(&self, headers: &HeaderMap) -> Option<SessionIdentity> {
        let jar = CookieJar::from_headers(headers);
        let token = jar.get(SESSION_COOKIE)?;
        match validate_session_token(token.value(), &self.secret) {
            Ok(user_id) => Some(SessionIdentity { user_id }),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring invalid session cookie");
                None
            }
        }
    }
}

/// The logged-in user bound to the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_id: UserId,
}

/// Optional session: `Some` for a valid session cookie, `None` for anonymous callers.
///
/// Never rejects. Expired, tampered and missing cookies all read as anonymous.
#[derive(Debug, Clone, Copy)]
pub struct MaybeSession(pub Option<SessionIdentity>);

impl MaybeSession {
    pub fn user_id(&self) -> Option<UserId> {
        self.0.map(|identity| identity.user_id)
    }
}

impl<S> FromRequestParts<S> for MaybeSession
where
    S: Send + Sync,
    SessionSettings: FromRef<S>,
{
    type Rejection = Infallible;

    // Resolve synchronously and return a 'static future so the returned future does not
    // borrow `parts` or `state`.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = SessionSettings::from_ref(state).identity_from_headers(&parts.headers);
        async move { Ok(Self(identity)) }
    }
}
