//! Document store abstraction.
//!
//! The transaction slice persists into an external schemaless document
//! store. The [`DocumentStore`] trait captures exactly the three operations
//! the service needs; the production implementation is the Firestore REST
//! adapter in [`firestore`], and tests substitute an in-memory fake.

pub mod firestore;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppError;

/// Contract for an external key-addressed document store.
///
/// Payloads are plain JSON objects; adapters own any conversion to their
/// wire representation. Keys are unique within a collection, and `upsert`
/// is create-or-replace.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch every document in `collection` as `(key, payload)` pairs.
    ///
    /// The whole collection is materialized in memory; there is no
    /// pagination in this contract.
    async fn list_documents(&self, collection: &str) -> Result<Vec<(String, Value)>, AppError>;

    /// Create or replace the document at `key`.
    ///
    /// Returns the store's write timestamp as an opaque string.
    async fn upsert(
        &self,
        collection: &str,
        key: &str,
        payload: Value,
    ) -> Result<String, AppError>;

    /// Delete the document at `key`.
    ///
    /// Returns [`AppError::NotFound`] if the store reports the document
    /// missing; callers decide whether that matters.
    async fn delete(&self, collection: &str, key: &str) -> Result<(), AppError>;
}
