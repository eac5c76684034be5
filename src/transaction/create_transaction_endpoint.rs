//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    envelope::{ErrorEnvelope, SuccessEnvelope},
    stores::TransactionStore,
    transaction::TransactionService,
};

/// The request body for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionData {
    /// A short description of what the transaction was for.
    pub text: String,
    /// The amount of money spent (negative) or earned (positive).
    pub amount: f64,
}

/// A route handler for creating a new transaction.
///
/// Responds with 201 Created and the stored record on success. A body that
/// cannot be parsed, or one that fails validation, produces a 400 error
/// envelope.
pub async fn create_transaction_endpoint<S>(
    State(service): State<TransactionService<S>>,
    payload: Result<Json<CreateTransactionData>, JsonRejection>,
) -> Response
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    let Json(data) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorEnvelope::new(rejection.body_text())),
            )
                .into_response();
        }
    };

    match service.add_transaction(&data.text, data.amount).await {
        Ok(transaction) => {
            (StatusCode::CREATED, Json(SuccessEnvelope::new(transaction))).into_response()
        }
        Err(error) => error.into_response(),
    }
}
