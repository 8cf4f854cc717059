//! Defines the core data models for transactions.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::session::SessionId;

/// A single credit or debit entry in the ledger.
///
/// Rows are created once and never updated or deleted. The sign of `amount`
/// is fixed at creation from the client's credit/debit choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, generated by the server.
    pub id: Uuid,
    /// A human-readable label for the transaction.
    pub title: String,
    /// The signed amount: positive for a credit, negative for a debit.
    pub amount: f64,
    /// When the transaction was recorded, assigned by the server.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// The session the transaction belongs to. Null only for rows inserted
    /// outside the API.
    pub session_id: Option<SessionId>,
}

/// The client's classification of a new transaction.
///
/// The type is converted to a sign on the stored amount and is not persisted
/// as its own column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in; stored with a positive amount.
    Credit,
    /// Money going out; stored with a negative amount.
    Debit,
}

impl TransactionType {
    /// Apply the sign convention to an input amount.
    pub fn signed_amount(self, amount: f64) -> f64 {
        match self {
            TransactionType::Credit => amount,
            TransactionType::Debit => -amount,
        }
    }
}
