//! Implements a struct that holds the state of the REST server.

use std::time::Duration;

use axum::extract::FromRef;

use crate::{stores::TransactionStore, transaction::TransactionService};

/// The state of the REST server.
///
/// The store is injected here once at startup and flows down to the
/// handlers; there is no process-wide storage handle.
#[derive(Debug, Clone)]
pub struct AppState<S>
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    /// The service for managing [transactions](crate::Transaction).
    pub transaction_service: TransactionService<S>,
}

impl<S> AppState<S>
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    /// Create a new [AppState] backed by `transaction_store`.
    ///
    /// Storage operations that take longer than `storage_timeout` fail the
    /// request instead of hanging.
    pub fn new(transaction_store: S, storage_timeout: Duration) -> Self {
        Self {
            transaction_service: TransactionService::new(transaction_store, storage_timeout),
        }
    }
}

// This impl hands the transaction service to the route handlers.
impl<S> FromRef<AppState<S>> for TransactionService<S>
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &AppState<S>) -> Self {
        state.transaction_service.clone()
    }
}
