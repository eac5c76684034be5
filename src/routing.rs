//! Application router configuration mapping the API routes to their
//! handlers.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};

use crate::{
    AppState, endpoints,
    envelope::ErrorEnvelope,
    stores::TransactionStore,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint::<S>).post(create_transaction_endpoint::<S>),
        )
        .route(
            endpoints::TRANSACTION,
            delete(delete_transaction_endpoint::<S>),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The response for requests to routes that do not exist.
async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorEnvelope::new(
            "the requested resource could not be found",
        )),
    )
        .into_response()
}
