//! Tally is a small web service for keeping a running ledger of income and
//! expenses.
//!
//! This library provides a JSON REST API for creating, listing and deleting
//! transactions. Every response is wrapped in a uniform envelope carrying a
//! success flag and either the payload or an error message.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod db;
mod endpoints;
mod envelope;
mod error;
mod routing;
mod state;
mod stores;
mod transaction;

pub use db::initialize as initialize_db;
pub use error::Error;
pub use routing::build_router;
pub use state::AppState;
pub use stores::{SqliteTransactionStore, TransactionStore};
pub use transaction::{
    DEFAULT_STORAGE_TIMEOUT, NewTransaction, Transaction, TransactionId, TransactionService,
};

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
