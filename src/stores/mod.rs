//! Defines the storage interface for transactions and its SQLite
//! implementation.

mod sqlite;
mod transaction;

pub(crate) use sqlite::create_transaction_table;
pub use sqlite::SqliteTransactionStore;
pub use transaction::TransactionStore;
