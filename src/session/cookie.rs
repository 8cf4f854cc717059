//! Defines functions for reading and minting the session cookie.

use std::fmt::Display;

use axum_extra::extract::{CookieJar, cookie::Cookie};
use serde::{Deserialize, Serialize};
use time::Duration;
use uuid::Uuid;

use crate::Error;

/// The name of the cookie holding the session token.
pub const COOKIE_SESSION: &str = "sessionId";

/// How long a freshly minted session cookie is valid for.
pub const SESSION_COOKIE_DURATION: Duration = Duration::days(7);

/// An opaque token correlating anonymous transactions to one client.
///
/// Minted tokens are UUIDs, but any cookie value presented by the client is
/// accepted as-is: an unknown token simply matches no rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Mint a new, randomly generated session token.
    pub fn mint() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The token as a string slice, e.g. for use as a query parameter.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read the session token from the cookie jar.
///
/// # Errors
/// Returns [Error::Unauthorized] if the session cookie is not in the jar.
pub fn get_session_id(jar: &CookieJar) -> Result<SessionId, Error> {
    jar.get(COOKIE_SESSION)
        .map(|cookie| SessionId::from(cookie.value_trimmed()))
        .ok_or(Error::Unauthorized)
}

/// The outcome of resolving the session for a create request.
///
/// Making the minted token an explicit output (rather than a side effect on
/// the response) keeps the create operation testable.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionResolution {
    /// The request already carried a session cookie with this token.
    Existing(SessionId),
    /// The request carried no session cookie; this token was freshly minted
    /// and the caller must attach it to the response as a cookie.
    Minted(SessionId),
}

/// Reuse the session token from the cookie jar, or mint a new one if the jar
/// has none.
///
/// Two concurrent requests without a cookie each mint their own token; there
/// is deliberately no deduplication.
pub fn resolve_session(jar: &CookieJar) -> SessionResolution {
    match jar.get(COOKIE_SESSION) {
        Some(cookie) => SessionResolution::Existing(SessionId::from(cookie.value_trimmed())),
        None => SessionResolution::Minted(SessionId::mint()),
    }
}

/// Build the `sessionId` cookie for a minted token: root path, 7-day expiry.
pub fn build_session_cookie(session_id: &SessionId) -> Cookie<'static> {
    Cookie::build((COOKIE_SESSION, session_id.to_string()))
        .path("/")
        .max_age(SESSION_COOKIE_DURATION)
        .build()
}
