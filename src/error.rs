//! Defines the app level error type and its conversion to JSON error
//! envelopes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{envelope::ErrorEnvelope, transaction::TransactionId};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string (or one that is all whitespace) was used as a
    /// transaction's text.
    #[error("transaction text cannot be empty")]
    EmptyText,

    /// A transaction's text exceeded the length bound.
    ///
    /// Carries the number of characters that were submitted.
    #[error("transaction text must be 200 characters or fewer, got {0}")]
    TextTooLong(usize),

    /// A NaN or infinite number was used as a transaction's amount.
    #[error("transaction amount must be a finite number")]
    NonFiniteAmount,

    /// Zero was used as a transaction's amount.
    ///
    /// A transaction records money moving, so an amount of zero is
    /// meaningless and rejected.
    #[error("transaction amount must not be zero")]
    ZeroAmount,

    /// The requested transaction does not exist in the store.
    ///
    /// The client should check that the ID is correct and that the
    /// transaction has not already been deleted.
    #[error("could not find a transaction with the ID {0}")]
    TransactionNotFound(TransactionId),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// A storage operation did not complete within the configured timeout.
    ///
    /// The operation itself may still complete in the background; the
    /// request just stops waiting for it.
    #[error("the storage operation timed out")]
    StorageTimeout,

    /// The blocking task running a storage operation died before producing
    /// a result.
    #[error("the storage task did not run to completion")]
    StorageTaskFailed,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, message) = match &self {
            Error::EmptyText
            | Error::TextTooLong(_)
            | Error::NonFiniteAmount
            | Error::ZeroAmount => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::TransactionNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            // Any errors that are not handled above are not intended to be
            // shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server Error".to_owned())
            }
        };

        (status_code, Json(ErrorEnvelope::new(message))).into_response()
    }
}

#[cfg(test)]
mod error_response_tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use serde_json::{Value, json};

    use super::Error;

    async fn response_parts(error: Error) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_errors_map_to_bad_request() {
        let (status, body) = response_parts(Error::EmptyText).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("transaction text cannot be empty"));
    }

    #[tokio::test]
    async fn not_found_names_the_missing_id() {
        let (status, body) = response_parts(Error::TransactionNotFound(42)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["error"],
            json!("could not find a transaction with the ID 42")
        );
    }

    #[tokio::test]
    async fn storage_errors_map_to_generic_server_error() {
        for error in [Error::StorageTimeout, Error::DatabaseLockError] {
            let (status, body) = response_parts(error).await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body["success"], json!(false));
            // Internal detail must not leak to the client.
            assert_eq!(body["error"], json!("Server Error"));
        }
    }
}
