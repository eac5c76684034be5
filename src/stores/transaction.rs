//! Defines the transaction store trait.

use crate::{
    Error,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// Handles the persistence of transactions.
///
/// Each method touches exactly one record (or reads the whole collection),
/// so implementations only need to provide single-record atomicity.
pub trait TransactionStore {
    /// Insert `new_transaction` into the store and return the stored record
    /// with its freshly assigned ID.
    fn insert(&self, new_transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve every transaction in the store, in insertion order.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Retrieve a transaction from the store by its `id`.
    ///
    /// # Errors
    /// Returns an [Error::TransactionNotFound] if `id` does not refer to a
    /// stored transaction.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Delete the transaction with `id`.
    ///
    /// Returns `true` if a record was removed and `false` if no record with
    /// `id` exists.
    fn delete(&self, id: TransactionId) -> Result<bool, Error>;
}
