//! The uniform JSON envelope that wraps every API response.

use serde::Serialize;

/// Wraps a successful response payload.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Always `true` on this envelope, so clients can branch on a single
    /// field.
    pub success: bool,

    /// The number of records in `data`. Only present on listing responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    /// The response payload.
    pub data: T,
}

impl<T> SuccessEnvelope<T> {
    /// Wrap `data` in a success envelope without a count.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            count: None,
            data,
        }
    }
}

impl<T> SuccessEnvelope<Vec<T>> {
    /// Wrap a listing in a success envelope, with `count` set to the number
    /// of records in `data`.
    pub fn listing(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(data.len()),
            data,
        }
    }
}

/// Wraps an error message.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Always `false` on this envelope.
    pub success: bool,

    /// A description of what went wrong.
    pub error: String,
}

impl ErrorEnvelope {
    /// Wrap `message` in an error envelope.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}
