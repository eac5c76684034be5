//! Implements the service that applies the business rules for transactions.

use std::time::Duration;

use tokio::{task, time::timeout};

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// How long the service waits for a storage operation before failing the
/// request with [Error::StorageTimeout].
pub const DEFAULT_STORAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Validates input, applies the business rules, and translates requests
/// into storage operations.
///
/// Storage operations run on a blocking thread and are bounded by the
/// storage timeout. A timed-out operation is not cancelled; the request
/// just stops waiting for it.
#[derive(Debug, Clone)]
pub struct TransactionService<S> {
    store: S,
    storage_timeout: Duration,
}

impl<S> TransactionService<S>
where
    S: TransactionStore + Clone + Send + 'static,
{
    /// Create a new service backed by `store`.
    pub fn new(store: S, storage_timeout: Duration) -> Self {
        Self {
            store,
            storage_timeout,
        }
    }

    /// Return every stored transaction, in insertion order.
    ///
    /// # Errors
    /// This function will return an [Error::StorageTimeout] if the store
    /// does not answer in time, or the error reported by the store.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, Error> {
        self.run_storage_operation(|store| store.get_all()).await
    }

    /// Validate `text` and `amount` and persist a new transaction.
    ///
    /// Returns the created record, including its assigned ID and timestamp.
    /// Nothing is written when validation fails.
    ///
    /// # Errors
    /// This function will return a:
    /// - validation error from [NewTransaction::new] if `text` or `amount`
    ///   violate the record constraints,
    /// - [Error::StorageTimeout] if the store does not answer in time,
    /// - or the error reported by the store.
    pub async fn add_transaction(&self, text: &str, amount: f64) -> Result<Transaction, Error> {
        let new_transaction = NewTransaction::new(text, amount)?;

        self.run_storage_operation(move |store| store.insert(new_transaction))
            .await
    }

    /// Delete the transaction with `id` and return the deleted ID.
    ///
    /// # Errors
    /// This function will return an:
    /// - [Error::TransactionNotFound] if `id` does not refer to a stored
    ///   transaction,
    /// - [Error::StorageTimeout] if the store does not answer in time,
    /// - or the error reported by the store.
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<TransactionId, Error> {
        self.run_storage_operation(move |store| {
            store.get(id)?;

            // The record can disappear between the lookup and the delete;
            // report that the same way as an unknown ID.
            if store.delete(id)? {
                Ok(id)
            } else {
                Err(Error::TransactionNotFound(id))
            }
        })
        .await
    }

    /// Run `operation` against the store on a blocking thread, bounded by
    /// the storage timeout.
    async fn run_storage_operation<T, F>(&self, operation: F) -> Result<T, Error>
    where
        F: FnOnce(&S) -> Result<T, Error> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.store.clone();
        let storage_task = task::spawn_blocking(move || operation(&store));

        match timeout(self.storage_timeout, storage_task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => {
                tracing::error!("the storage task did not run to completion: {}", join_error);
                Err(Error::StorageTaskFailed)
            }
            Err(_) => Err(Error::StorageTimeout),
        }
    }
}

#[cfg(test)]
mod service_tests {
    use std::{
        sync::{Arc, Mutex},
        thread,
        time::Duration,
    };

    use rusqlite::Connection;

    use crate::{
        Error,
        db::initialize,
        stores::{SqliteTransactionStore, TransactionStore},
        transaction::{NewTransaction, Transaction, TransactionId},
    };

    use super::TransactionService;

    fn get_test_service() -> TransactionService<SqliteTransactionStore> {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        let store = SqliteTransactionStore::new(Arc::new(Mutex::new(connection)));

        TransactionService::new(store, Duration::from_secs(1))
    }

    #[tokio::test]
    async fn add_transaction_appears_in_listing() {
        let service = get_test_service();

        let created = service.add_transaction("Groceries", -42.5).await.unwrap();

        let transactions = service.list_transactions().await.unwrap();

        assert_eq!(transactions, vec![created.clone()]);
        assert_eq!(created.text, "Groceries");
        assert_eq!(created.amount, -42.5);
    }

    #[tokio::test]
    async fn add_transaction_assigns_unique_ids() {
        let service = get_test_service();

        let first = service.add_transaction("Salary", 1500.0).await.unwrap();
        let second = service.add_transaction("Salary", 1500.0).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn add_transaction_rejects_invalid_input_without_writing() {
        let service = get_test_service();

        assert_eq!(
            service.add_transaction("", -42.5).await,
            Err(Error::EmptyText)
        );
        assert_eq!(
            service.add_transaction("Groceries", 0.0).await,
            Err(Error::ZeroAmount)
        );
        assert_eq!(
            service.add_transaction("Groceries", f64::NAN).await,
            Err(Error::NonFiniteAmount)
        );

        assert_eq!(service.list_transactions().await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn delete_transaction_removes_exactly_that_record() {
        let service = get_test_service();

        let keep = service.add_transaction("Salary", 1500.0).await.unwrap();
        let remove = service.add_transaction("Rent", -800.0).await.unwrap();

        let deleted_id = service.delete_transaction(remove.id).await.unwrap();

        assert_eq!(deleted_id, remove.id);
        assert_eq!(service.list_transactions().await.unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn delete_transaction_fails_on_unknown_id_without_changes() {
        let service = get_test_service();

        let transaction = service.add_transaction("Salary", 1500.0).await.unwrap();

        let result = service.delete_transaction(transaction.id + 1).await;

        assert_eq!(result, Err(Error::TransactionNotFound(transaction.id + 1)));
        assert_eq!(
            service.list_transactions().await.unwrap(),
            vec![transaction]
        );
    }

    /// A store whose reads block for longer than the test timeout.
    #[derive(Clone)]
    struct SlowStore;

    impl TransactionStore for SlowStore {
        fn insert(&self, _: NewTransaction) -> Result<Transaction, Error> {
            unimplemented!()
        }

        fn get_all(&self) -> Result<Vec<Transaction>, Error> {
            thread::sleep(Duration::from_millis(500));
            Ok(vec![])
        }

        fn get(&self, _: TransactionId) -> Result<Transaction, Error> {
            unimplemented!()
        }

        fn delete(&self, _: TransactionId) -> Result<bool, Error> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn slow_storage_operation_fails_with_timeout() {
        let service = TransactionService::new(SlowStore, Duration::from_millis(10));

        let result = service.list_transactions().await;

        assert_eq!(result, Err(Error::StorageTimeout));
    }
}
