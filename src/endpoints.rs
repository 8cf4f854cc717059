//! Defines the route paths for the application.

/// The path for listing and creating transactions.
pub const TRANSACTIONS: &str = "/transactions";

/// The path for the session balance summary.
///
/// The static segment takes priority over the `{id}` capture, so "summary"
/// is never parsed as a transaction id.
pub const TRANSACTIONS_SUMMARY: &str = "/transactions/summary";

/// The path for fetching a single transaction by its id.
pub const TRANSACTION: &str = "/transactions/{id}";
