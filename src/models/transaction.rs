//! Transaction data model.
//!
//! A single struct serves as the request body, the stored document payload,
//! and the response shape. The stored payload includes the `id`, but
//! list-all always overwrites it with the document's storage key.

use serde::{Deserialize, Serialize};

/// A financial transaction.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "type": "minus",
///   "amount": 42.5,
///   "category": "groceries",
///   "date": "2026-08-01T12:30:00Z"
/// }
/// ```
///
/// # Fields
///
/// - `id` may be omitted on create; the service assigns a random UUID and
///   uses it as the document key.
/// - `kind` is serialized as `type`; callers use `"plus"` or `"minus"`, but
///   the value is deliberately not constrained.
/// - `date` is an opaque ISO-8601 string, stored and returned verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Document key; empty string means "not assigned yet"
    #[serde(default)]
    pub id: String,

    /// Direction of the transaction, conventionally "plus" or "minus"
    #[serde(rename = "type")]
    pub kind: String,

    /// Transaction amount; sign is not enforced
    pub amount: f64,

    /// Free-form category label
    pub category: String,

    /// ISO-8601 date/time string, never parsed
    pub date: String,
}
