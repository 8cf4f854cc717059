//! Defines the SQLite schema for the application.

use rusqlite::Connection;

/// Create the table for transactions if it does not already exist.
///
/// `id` and `session_id` hold UUID strings. `amount` is the signed amount,
/// negative for debits. `created_at` defaults to the database clock but is
/// always set explicitly by the insert query so that the stored format
/// round-trips through the driver.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            amount REAL NOT NULL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            session_id TEXT
        )",
        (),
    )?;

    Ok(())
}

#[cfg(test)]
mod db_tests {
    use rusqlite::Connection;

    use crate::db::initialize;

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
    }

    #[test]
    fn initialize_is_idempotent() {
        let connection = get_test_connection();

        initialize(&connection).unwrap();
    }

    #[test]
    fn can_insert_a_row() {
        let connection = get_test_connection();

        let inserted = connection
            .execute(
                "INSERT INTO transactions (id, title, amount, session_id)
                 VALUES (?1, ?2, ?3, ?4)",
                ("an-id", "Groceries", -42.5, "a-session"),
            )
            .unwrap();

        assert_eq!(inserted, 1);
    }

    #[test]
    fn session_id_is_nullable() {
        let connection = get_test_connection();

        let inserted = connection
            .execute(
                "INSERT INTO transactions (id, title, amount) VALUES (?1, ?2, ?3)",
                ("raw-insert", "Legacy row", 1.0),
            )
            .unwrap();

        assert_eq!(inserted, 1);
    }
}
