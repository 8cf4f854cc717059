//! Defines the endpoint for fetching a single transaction by its id.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State, rejection::PathRejection},
};
use axum_extra::extract::CookieJar;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    AppState, Error,
    session::get_session_id,
    transaction::{models::Transaction, query::get_transaction},
};

/// The state needed to fetch a transaction.
#[derive(Debug, Clone)]
pub struct GetTransactionState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for GetTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The response body for the get-by-id endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    /// The requested transaction.
    pub transaction: Transaction,
}

/// A route handler for fetching one of the session's transactions by id.
///
/// The session guard ensures the cookie is present before this handler runs.
///
/// # Errors
/// This function will return an:
/// - [Error::InvalidRequest] if the id path parameter is not a valid UUID,
/// - [Error::NotFound] if no transaction matches the id for this session,
/// - or [Error::SqlError] if the query fails.
pub async fn get_transaction_endpoint(
    State(state): State<GetTransactionState>,
    jar: CookieJar,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<TransactionResponse>, Error> {
    let session_id = get_session_id(&jar)?;
    let Path(id) = id.map_err(|rejection| Error::InvalidRequest(rejection.body_text()))?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;
    let transaction = get_transaction(id, &session_id, &connection)?;

    Ok(Json(TransactionResponse { transaction }))
}

#[cfg(test)]
mod get_transaction_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json,
        extract::{Path, State},
    };
    use axum_extra::extract::CookieJar;
    use rusqlite::Connection;
    use uuid::Uuid;

    use crate::{
        Error,
        db::initialize,
        session::{SessionId, build_session_cookie},
        transaction::query::insert_transaction,
    };

    use super::{GetTransactionState, get_transaction_endpoint};

    fn get_test_state() -> GetTransactionState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        GetTransactionState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn get_returns_the_sessions_transaction() {
        let state = get_test_state();
        let session_id = SessionId::mint();
        let want = {
            let connection = state.db_connection.lock().unwrap();
            insert_transaction("New Transaction", 5000.0, &session_id, &connection).unwrap()
        };
        let jar = CookieJar::new().add(build_session_cookie(&session_id));

        let Json(response) = get_transaction_endpoint(State(state), jar, Ok(Path(want.id)))
            .await
            .unwrap();

        assert_eq!(response.transaction, want);
    }

    #[tokio::test]
    async fn get_with_unknown_id_is_not_found() {
        let state = get_test_state();
        let jar = CookieJar::new().add(build_session_cookie(&SessionId::mint()));

        let result = get_transaction_endpoint(State(state), jar, Ok(Path(Uuid::new_v4()))).await;

        assert_eq!(result.unwrap_err(), Error::NotFound);
    }

    #[tokio::test]
    async fn get_with_another_sessions_id_is_not_found() {
        let state = get_test_state();
        let owner = SessionId::mint();
        let transaction = {
            let connection = state.db_connection.lock().unwrap();
            insert_transaction("Private", 10.0, &owner, &connection).unwrap()
        };
        let jar = CookieJar::new().add(build_session_cookie(&SessionId::mint()));

        let result = get_transaction_endpoint(State(state), jar, Ok(Path(transaction.id))).await;

        assert_eq!(result.unwrap_err(), Error::NotFound);
    }
}
