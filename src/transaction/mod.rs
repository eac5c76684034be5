//! Transaction management for the ledger API.
//!
//! This module contains everything related to transactions:
//! - The [Transaction] record and [NewTransaction] validation
//! - The [TransactionService] that applies the business rules
//! - The route handlers for the transaction endpoints

mod create_transaction_endpoint;
mod delete_transaction_endpoint;
mod list_transactions_endpoint;
mod models;
mod service;

pub use create_transaction_endpoint::create_transaction_endpoint;
pub use delete_transaction_endpoint::delete_transaction_endpoint;
pub use list_transactions_endpoint::list_transactions_endpoint;
pub use models::{MAX_TEXT_CHARS, NewTransaction, Transaction, TransactionId};
pub use service::{DEFAULT_STORAGE_TIMEOUT, TransactionService};
