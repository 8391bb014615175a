//! Session token issue and validation.

use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, get_current_timestamp,
};
use serde::{Deserialize, Serialize};

use wordbook_domain::id::UserId;

/// Session lifetime in seconds (30 days). Also the cookie `Max-Age`.
pub const SESSION_TTL_SECS: u64 = 2_592_000;

/// Errors returned by [`issue_session_token`] and [`validate_session_token`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("session expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("failed to sign session token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Claims payload.
///
/// | Field | Meaning |
/// |-------|---------|
/// | `sub` | user id as decimal string |
/// | `exp` | expiration, seconds since UNIX epoch |
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    exp: u64,
}

/// Sign a session token for `user_id`, valid for [`SESSION_TTL_SECS`].
pub fn issue_session_token(
    user_id: UserId,
    secret: &str,
) -> Result<String, SessionError> {
    issue_session_token_at(user_id, secret, get_current_timestamp())
}

/// Sign a session token as if issued at `issued_at` (seconds since UNIX epoch).
pub fn issue_session_token_at(
    user_id: UserId,
    secret: &str,
    issued_at: u64,
) -> Result<String, SessionError> {
    let claims = SessionClaims {
        sub: user_id.to_string(),
        exp: issued_at + SESSION_TTL_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(SessionError::Signing)
}

/// Validate `token` and return the user it was issued for.
///
/// HS256 only, `exp` and `sub` required, default 60s leeway.
pub fn validate_session_token(token: &str, secret: &str) -> Result<UserId, SessionError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => SessionError::InvalidSignature,
        _ => SessionError::Malformed,
    })?;

    data.claims
        .sub
        .parse::<UserId>()
        .map_err(|_| SessionError::Malformed)
}
