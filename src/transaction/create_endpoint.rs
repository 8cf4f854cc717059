//! Defines the endpoint for creating a new transaction.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
};
use axum_extra::extract::CookieJar;
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error,
    session::{SessionResolution, build_session_cookie, resolve_session},
    transaction::{models::TransactionType, query::insert_transaction},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for storing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The JSON body for creating a transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransactionBody {
    /// A human-readable label for the transaction. Must not be empty.
    pub title: String,
    /// The unsigned amount; the sign is derived from `type`.
    pub amount: f64,
    /// Whether the amount is a credit or a debit.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// A route handler for creating a new transaction.
///
/// If the request carries no session cookie, a session token is minted and
/// attached to the response as a cookie scoped to `/` with a 7-day expiry.
/// Responds 201 with an empty body on success.
///
/// # Errors
/// Returns an [Error::InvalidRequest] for a malformed body, an
/// [Error::EmptyTitle] for a blank title, or an [Error::SqlError] if the
/// insert fails.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    jar: CookieJar,
    body: Result<Json<CreateTransactionBody>, JsonRejection>,
) -> Result<(CookieJar, StatusCode), Error> {
    let Json(body) = body.map_err(|rejection| Error::InvalidRequest(rejection.body_text()))?;

    if body.title.trim().is_empty() {
        return Err(Error::EmptyTitle);
    }

    let (session_id, jar) = match resolve_session(&jar) {
        SessionResolution::Existing(session_id) => (session_id, jar),
        SessionResolution::Minted(session_id) => {
            let jar = jar.add(build_session_cookie(&session_id));
            (session_id, jar)
        }
    };

    let amount = body.transaction_type.signed_amount(body.amount);

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;
    insert_transaction(&body.title, amount, &session_id, &connection)?;

    Ok((jar, StatusCode::CREATED))
}
