//! Database initialization for the application.

use rusqlite::Connection;

use crate::{Error, stores::create_transaction_table};

/// Create the application tables if they do not already exist.
///
/// This should be called once at startup, before the connection is handed
/// to a store.
///
/// # Errors
/// Returns an [Error::SqlError] if a table cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_transaction_table(connection)?;

    Ok(())
}
