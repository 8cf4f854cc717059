//! Defines the database queries for transactions.

use rusqlite::{Connection, Row, types::Type};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Error, session::SessionId, transaction::models::Transaction};

/// Insert a new transaction with a freshly generated id and the current time.
///
/// `amount` must already carry the sign for the transaction type.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn insert_transaction(
    title: &str,
    amount: f64,
    session_id: &SessionId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (id, title, amount, created_at, session_id)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, title, amount, created_at, session_id",
        )?
        .query_row(
            (
                Uuid::new_v4().to_string(),
                title,
                amount,
                OffsetDateTime::now_utc(),
                session_id.as_str(),
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve all transactions for `session_id` in insertion order.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn list_transactions(
    session_id: &SessionId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, title, amount, created_at, session_id
             FROM transactions WHERE session_id = ?1",
        )?
        .query_map((session_id.as_str(),), map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Retrieve the transaction matching both `id` and `session_id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if no row matches, including when the transaction
///   exists but belongs to another session,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_transaction(
    id: Uuid,
    session_id: &SessionId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, title, amount, created_at, session_id
             FROM transactions WHERE id = ?1 AND session_id = ?2",
        )?
        .query_row((id.to_string(), session_id.as_str()), map_transaction_row)?;

    Ok(transaction)
}

/// Sum the signed amounts of all transactions for `session_id`.
///
/// SQL `SUM` yields NULL when the session has no rows; this is normalized to
/// `0.0` so that a fresh session reads as a zero balance.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn summarize_transactions(
    session_id: &SessionId,
    connection: &Connection,
) -> Result<f64, Error> {
    let total: Option<f64> = connection
        .prepare("SELECT SUM(amount) AS amount FROM transactions WHERE session_id = ?1")?
        .query_row((session_id.as_str(),), |row| row.get(0))?;

    Ok(total.unwrap_or(0.0))
}

fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id: String = row.get(0)?;
    let id = Uuid::parse_str(&id).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(error))
    })?;
    let session_id: Option<String> = row.get(4)?;

    Ok(Transaction {
        id,
        title: row.get(1)?,
        amount: row.get(2)?,
        created_at: row.get(3)?,
        session_id: session_id.map(SessionId::from),
    })
}
