//! The API endpoint URIs.
//!
//! For the endpoint that takes a parameter, use [format_endpoint].

/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/api/v1/transactions";
/// The route to delete a single transaction.
pub const TRANSACTION: &str = "/api/v1/transactions/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is the part of the path between a left brace and the next
/// right brace, e.g. `{transaction_id}` in `/api/v1/transactions/{transaction_id}`.
///
/// If `endpoint_path` has no parameter, it is returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    match (endpoint_path.find('{'), endpoint_path.find('}')) {
        (Some(start), Some(end)) if start < end => format!(
            "{}{}{}",
            &endpoint_path[..start],
            id,
            &endpoint_path[end + 1..]
        ),
        _ => endpoint_path.to_string(),
    }
}

// These tests are here so that we know the routes will parse as URIs once
// the parameter is filled in.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS);
        assert_endpoint_is_valid_uri(&format_endpoint(endpoints::TRANSACTION, 1));
    }

    #[test]
    fn format_endpoint_replaces_parameter() {
        let formatted_path = format_endpoint("/api/v1/transactions/{transaction_id}", 42);

        assert_eq!(formatted_path, "/api/v1/transactions/42");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn format_endpoint_returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/api/v1/transactions", 42);

        assert_eq!(formatted_path, "/api/v1/transactions");
    }
}
