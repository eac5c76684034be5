//! Defines the endpoint for deleting a transaction.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    envelope::{ErrorEnvelope, SuccessEnvelope},
    stores::TransactionStore,
    transaction::{TransactionId, TransactionService},
};

/// The payload returned after a transaction is deleted.
#[derive(Debug, Serialize)]
pub struct DeletedTransaction {
    /// The ID of the record that was removed.
    pub id: TransactionId,
}

/// A route handler for deleting a transaction by its ID.
///
/// Responds with the deleted ID on success, a 404 error envelope when the
/// ID is unknown, and a 400 error envelope when the path parameter is not a
/// valid ID.
pub async fn delete_transaction_endpoint<S>(
    State(service): State<TransactionService<S>>,
    transaction_id: Result<Path<TransactionId>, PathRejection>,
) -> Response
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    let Path(id) = match transaction_id {
        Ok(path) => path,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorEnvelope::new(rejection.body_text())),
            )
                .into_response();
        }
    };

    match service.delete_transaction(id).await {
        Ok(id) => (
            StatusCode::OK,
            Json(SuccessEnvelope::new(DeletedTransaction { id })),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
