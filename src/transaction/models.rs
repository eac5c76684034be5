//! Defines the core transaction record and the validation applied when one
//! is created.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::Error;

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// The maximum number of characters allowed in a transaction's text.
pub const MAX_TEXT_CHARS: usize = 200;

/// A single ledger entry: money spent or earned.
///
/// Positive amounts represent income, negative amounts represent expenses.
/// Records are never mutated in place; they are created once and live until
/// they are deleted by ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store on creation.
    pub id: TransactionId,

    /// A short description of what the transaction was for.
    pub text: String,

    /// The amount of money spent or earned.
    pub amount: f64,

    /// When the transaction was recorded.
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A validated transaction that has not been stored yet.
///
/// The only way to construct one is [NewTransaction::new], so a value of
/// this type always satisfies the record invariants and can be handed to a
/// store as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    text: String,
    amount: f64,
    created_at: OffsetDateTime,
}

impl NewTransaction {
    /// Validate `text` and `amount` and stamp the record with the current
    /// time.
    ///
    /// Leading and trailing whitespace is trimmed from `text` before
    /// validation, so whitespace-only text is rejected as empty.
    ///
    /// # Errors
    /// This function will return an:
    /// - [Error::EmptyText] if `text` is empty after trimming,
    /// - [Error::TextTooLong] if `text` is longer than [MAX_TEXT_CHARS]
    ///   characters,
    /// - [Error::NonFiniteAmount] if `amount` is NaN or infinite,
    /// - or [Error::ZeroAmount] if `amount` is zero.
    pub fn new(text: &str, amount: f64) -> Result<Self, Error> {
        let text = text.trim();

        if text.is_empty() {
            return Err(Error::EmptyText);
        }

        let char_count = text.chars().count();
        if char_count > MAX_TEXT_CHARS {
            return Err(Error::TextTooLong(char_count));
        }

        if !amount.is_finite() {
            return Err(Error::NonFiniteAmount);
        }

        if amount == 0.0 {
            return Err(Error::ZeroAmount);
        }

        Ok(Self {
            text: text.to_owned(),
            amount,
            created_at: OffsetDateTime::now_utc(),
        })
    }

    /// The trimmed description of the transaction.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The amount of money spent or earned.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// When the transaction was recorded.
    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }
}
