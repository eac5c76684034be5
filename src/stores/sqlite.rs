//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// Stores transactions in a SQLite database.
///
/// The connection is shared behind a mutex, so clones of the store hand out
/// access to the same database.
#[derive(Debug, Clone)]
pub struct SqliteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock_connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|_| Error::DatabaseLockError)
    }
}

impl TransactionStore for SqliteTransactionStore {
    /// Insert a new transaction into the database.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error, or an [Error::DatabaseLockError] if the connection lock is
    /// poisoned.
    fn insert(&self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let transaction = self
            .lock_connection()?
            .prepare(
                "INSERT INTO \"transaction\" (text, amount, created_at)
                 VALUES (?1, ?2, ?3)
                 RETURNING id, text, amount, created_at",
            )?
            .query_row(
                (
                    new_transaction.text(),
                    new_transaction.amount(),
                    new_transaction.created_at(),
                ),
                map_transaction_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve every transaction in the database, oldest first.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.lock_connection()?
            .prepare("SELECT id, text, amount, created_at FROM \"transaction\" ORDER BY id ASC")?
            .query_map([], map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    /// Retrieve a transaction from the database by its `id`.
    ///
    /// # Errors
    /// This function will return an [Error::TransactionNotFound] if `id`
    /// does not refer to a stored transaction, or an [Error::SqlError] if
    /// there is some other SQL error.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.lock_connection()?
            .prepare("SELECT id, text, amount, created_at FROM \"transaction\" WHERE id = :id")?
            .query_row(&[(":id", &id)], map_transaction_row)
            .map_err(|error| match error {
                rusqlite::Error::QueryReturnedNoRows => Error::TransactionNotFound(id),
                error => error.into(),
            })
    }

    /// Delete the transaction with `id`, reporting whether a row was
    /// removed.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error.
    fn delete(&self, id: TransactionId) -> Result<bool, Error> {
        let rows_affected = self
            .lock_connection()?
            .execute("DELETE FROM \"transaction\" WHERE id = :id", &[(":id", &id)])?;

        Ok(rows_affected > 0)
    }
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub(crate) fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                text TEXT NOT NULL,
                amount REAL NOT NULL,
                created_at TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        text: row.get(1)?,
        amount: row.get(2)?,
        created_at: row.get(3)?,
    })
}

#[cfg(test)]
mod sqlite_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{
        Error, db::initialize, stores::TransactionStore, transaction::NewTransaction,
    };

    use super::SqliteTransactionStore;

    fn get_test_store() -> SqliteTransactionStore {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        SqliteTransactionStore::new(Arc::new(Mutex::new(connection)))
    }

    #[test]
    fn insert_assigns_unique_ids() {
        let store = get_test_store();

        let first = store
            .insert(NewTransaction::new("Salary", 1500.0).unwrap())
            .unwrap();
        let second = store
            .insert(NewTransaction::new("Rent", -800.0).unwrap())
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.text, "Salary");
        assert_eq!(first.amount, 1500.0);
    }

    #[test]
    fn get_all_returns_transactions_in_insertion_order() {
        let store = get_test_store();

        let inserted = vec![
            store
                .insert(NewTransaction::new("Salary", 1500.0).unwrap())
                .unwrap(),
            store
                .insert(NewTransaction::new("Rent", -800.0).unwrap())
                .unwrap(),
            store
                .insert(NewTransaction::new("Groceries", -42.5).unwrap())
                .unwrap(),
        ];

        let transactions = store.get_all().unwrap();

        assert_eq!(transactions, inserted);
    }

    #[test]
    fn get_all_returns_empty_vec_for_empty_store() {
        let store = get_test_store();

        assert_eq!(store.get_all().unwrap(), vec![]);
    }

    #[test]
    fn get_returns_inserted_transaction() {
        let store = get_test_store();

        let inserted = store
            .insert(NewTransaction::new("Groceries", -42.5).unwrap())
            .unwrap();

        let selected = store.get(inserted.id).unwrap();

        assert_eq!(selected, inserted);
    }

    #[test]
    fn get_fails_on_unknown_id() {
        let store = get_test_store();

        let maybe_transaction = store.get(1337);

        assert_eq!(maybe_transaction, Err(Error::TransactionNotFound(1337)));
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let store = get_test_store();

        let keep = store
            .insert(NewTransaction::new("Salary", 1500.0).unwrap())
            .unwrap();
        let remove = store
            .insert(NewTransaction::new("Rent", -800.0).unwrap())
            .unwrap();

        assert!(store.delete(remove.id).unwrap());

        assert_eq!(store.get_all().unwrap(), vec![keep]);
    }

    #[test]
    fn delete_reports_false_on_unknown_id() {
        let store = get_test_store();

        assert!(!store.delete(1337).unwrap());
    }
}
