//! Coinpurse is a small JSON API for keeping a personal ledger of credit and
//! debit transactions.
//!
//! Transactions belong to an anonymous session identified by a `sessionId`
//! cookie. The cookie is minted on the first write and must accompany all
//! reads. This library provides the router, application state, and SQLite
//! storage; the `server` binary wires them to an HTTP listener.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod db;
mod endpoints;
mod routing;
mod session;
mod state;
mod transaction;

pub use db::initialize as initialize_db;
pub use routing::build_router;
pub use session::SessionId;
pub use state::AppState;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A read endpoint was called without a session cookie.
    ///
    /// The client must first create a transaction, which mints the session
    /// cookie, and then send that cookie with subsequent requests.
    #[error("the request did not include a session cookie")]
    Unauthorized,

    /// The request body or a path parameter did not match the expected
    /// schema. The string holds the detail produced by the parsing layer and
    /// is safe to show to the client.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// An empty string was used as a transaction title.
    #[error("transaction title cannot be empty")]
    EmptyTitle,

    /// The requested transaction was not found for the caller's session.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested transaction could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::SqlError(error),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized." })),
            )
                .into_response(),
            // Plain-text body, matching what clients of the API expect.
            Error::NotFound => (StatusCode::NOT_FOUND, "Transaction not found.").into_response(),
            Error::EmptyTitle => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Title must not be empty." })),
            )
                .into_response(),
            Error::InvalidRequest(detail) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": detail }))).into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error." })),
                )
                    .into_response()
            }
        }
    }
}
