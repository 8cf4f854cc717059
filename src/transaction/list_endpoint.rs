//! Defines the endpoint for listing a session's transactions.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use axum_extra::extract::CookieJar;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    session::get_session_id,
    transaction::{models::Transaction, query::list_transactions},
};

/// The state needed to list transactions.
#[derive(Debug, Clone)]
pub struct ListTransactionsState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The response body for the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionListResponse {
    /// All transactions for the caller's session, in insertion order.
    pub transactions: Vec<Transaction>,
}

/// A route handler for listing all of the session's transactions.
///
/// The session guard ensures the cookie is present before this handler runs.
///
/// # Errors
/// Returns an [Error::SqlError] if the query fails.
pub async fn list_transactions_endpoint(
    State(state): State<ListTransactionsState>,
    jar: CookieJar,
) -> Result<Json<TransactionListResponse>, Error> {
    let session_id = get_session_id(&jar)?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;
    let transactions = list_transactions(&session_id, &connection)?;

    Ok(Json(TransactionListResponse { transactions }))
}

#[cfg(test)]
mod list_transactions_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, extract::State};
    use axum_extra::extract::CookieJar;
    use rusqlite::Connection;

    use crate::{
        db::initialize,
        session::{SessionId, build_session_cookie},
        transaction::query::insert_transaction,
    };

    use super::{ListTransactionsState, list_transactions_endpoint};

    fn get_test_state() -> ListTransactionsState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        ListTransactionsState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn list_returns_only_the_sessions_transactions() {
        let state = get_test_state();
        let session_id = SessionId::mint();
        {
            let connection = state.db_connection.lock().unwrap();
            insert_transaction("Mine", 5000.0, &session_id, &connection).unwrap();
            insert_transaction("Theirs", 9000.0, &SessionId::mint(), &connection).unwrap();
        }
        let jar = CookieJar::new().add(build_session_cookie(&session_id));

        let Json(response) = list_transactions_endpoint(State(state), jar).await.unwrap();

        assert_eq!(response.transactions.len(), 1);
        assert_eq!(response.transactions[0].title, "Mine");
        assert_eq!(response.transactions[0].amount, 5000.0);
    }

    #[tokio::test]
    async fn list_of_fresh_session_is_empty() {
        let state = get_test_state();
        let jar = CookieJar::new().add(build_session_cookie(&SessionId::mint()));

        let Json(response) = list_transactions_endpoint(State(state), jar).await.unwrap();

        assert!(response.transactions.is_empty());
    }
}
