//! Identifies anonymous sessions with a `sessionId` cookie.
//!
//! There is no log-in: the first create request mints a session token and
//! sets it as a cookie, and every read request must present that cookie.

mod cookie;
mod middleware;

pub use cookie::{
    COOKIE_SESSION, SESSION_COOKIE_DURATION, SessionId, SessionResolution, build_session_cookie,
    get_session_id, resolve_session,
};
pub use middleware::session_guard;
