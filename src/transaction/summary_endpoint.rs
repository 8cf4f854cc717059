//! Defines the endpoint for the session's balance summary.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use axum_extra::extract::CookieJar;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error, session::get_session_id, transaction::query::summarize_transactions,
};

/// The state needed to compute the summary.
#[derive(Debug, Clone)]
pub struct SummaryState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The aggregate balance for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of all signed amounts; zero for a session with no rows.
    pub amount: f64,
}

/// The response body for the summary endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The session's current balance.
    pub summary: Summary,
}

/// A route handler for the session's running balance.
///
/// The session guard ensures the cookie is present before this handler runs.
///
/// # Errors
/// Returns an [Error::SqlError] if the query fails.
pub async fn get_summary_endpoint(
    State(state): State<SummaryState>,
    jar: CookieJar,
) -> Result<Json<SummaryResponse>, Error> {
    let session_id = get_session_id(&jar)?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;
    let amount = summarize_transactions(&session_id, &connection)?;

    Ok(Json(SummaryResponse {
        summary: Summary { amount },
    }))
}
