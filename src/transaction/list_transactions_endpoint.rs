//! Defines the endpoint for listing every stored transaction.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    envelope::SuccessEnvelope, stores::TransactionStore, transaction::TransactionService,
};

/// A route handler for listing all transactions, oldest first.
///
/// Responds with the listing envelope, which carries the record count
/// alongside the records themselves.
pub async fn list_transactions_endpoint<S>(
    State(service): State<TransactionService<S>>,
) -> Response
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    match service.list_transactions().await {
        Ok(transactions) => {
            (StatusCode::OK, Json(SuccessEnvelope::listing(transactions))).into_response()
        }
        Err(error) => error.into_response(),
    }
}
