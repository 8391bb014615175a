//! Cookie-based login sessions.
//!
//! A session is an HS256-signed token naming the user id, stored in the
//! [`cookie::SESSION_COOKIE`] cookie. Handlers read it with [`identity::MaybeSession`].

pub mod cookie;
pub mod identity;
pub mod token;

pub use identity::{MaybeSession, SessionIdentity, SessionSettings};
