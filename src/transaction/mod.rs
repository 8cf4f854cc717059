//! The transaction domain: models, database queries, and one handler per
//! HTTP operation (create, list, get by id, summary).

mod create_endpoint;
mod get_endpoint;
mod list_endpoint;
mod models;
mod query;
mod summary_endpoint;

pub use create_endpoint::{CreateTransactionBody, create_transaction_endpoint};
pub use get_endpoint::{TransactionResponse, get_transaction_endpoint};
pub use list_endpoint::{TransactionListResponse, list_transactions_endpoint};
pub use models::{Transaction, TransactionType};
pub use summary_endpoint::{Summary, SummaryResponse, get_summary_endpoint};
