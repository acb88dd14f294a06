//! Transaction service - persistence logic for transactions.
//!
//! This service handles:
//! - Listing the whole collection as an in-memory snapshot
//! - Upserting transactions, assigning ids where missing
//! - Deleting by id
//!
//! # Degraded mode
//!
//! The store may be absent at startup. Policy per operation:
//! list-all returns an empty vector, delete is a no-op, and save fails
//! with [`AppError::NotConfigured`] (which the HTTP layer flattens into
//! the legacy `"Firestore not initialized"` body).

use serde_json::Value;
use uuid::Uuid;

use crate::capability::Capability;
use crate::error::AppError;
use crate::models::transaction::Transaction;
use crate::store::DocumentStore;

/// Collection holding all transaction documents.
const COLLECTION_NAME: &str = "transactions";

pub struct TransactionService {
    store: Capability<dyn DocumentStore>,
    collection: String,
}

impl TransactionService {
    pub fn new(store: Capability<dyn DocumentStore>) -> Self {
        Self {
            store,
            collection: COLLECTION_NAME.to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_configured()
    }

    /// Fetch every transaction in the collection.
    ///
    /// The document's storage key always wins over whatever `id` the
    /// stored payload carries, so stale or missing ids cannot leak out.
    /// Documents that no longer decode into a [`Transaction`] are skipped
    /// with a warning rather than failing the whole listing.
    ///
    /// # Errors
    ///
    /// Store failures propagate. An unconfigured store is not a failure:
    /// the result is an empty vector.
    pub async fn list_all(&self) -> Result<Vec<Transaction>, AppError> {
        let client = match &self.store {
            Capability::Configured(client) => client,
            Capability::NotConfigured => return Ok(Vec::new()),
        };

        let documents = client.list_documents(&self.collection).await?;

        let mut transactions = Vec::with_capacity(documents.len());
        for (key, payload) in documents {
            match serde_json::from_value::<Transaction>(payload) {
                Ok(mut transaction) => {
                    transaction.id = key;
                    transactions.push(transaction);
                }
                Err(err) => {
                    tracing::warn!(document = %key, "skipping undecodable document: {err}");
                }
            }
        }

        Ok(transactions)
    }

    /// Upsert a transaction, assigning a fresh UUID when `id` is empty.
    ///
    /// Save always overwrites: there is no update-vs-insert distinction,
    /// and the store's last-write-wins ordering applies.
    ///
    /// # Returns
    ///
    /// The store's write timestamp as an opaque string.
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: `amount` is not a finite number
    /// - `NotConfigured`: the store is absent
    /// - `Provider`: the store call failed
    pub async fn save(&self, mut transaction: Transaction) -> Result<String, AppError> {
        let client = self.store.get()?;

        // JSON cannot carry NaN/Infinity, but direct callers can
        if !transaction.amount.is_finite() {
            return Err(AppError::InvalidInput(
                "amount must be a finite number".to_string(),
            ));
        }

        if transaction.id.is_empty() {
            transaction.id = Uuid::new_v4().to_string();
        }

        let key = transaction.id.clone();
        let payload: Value = serde_json::to_value(&transaction)
            .map_err(|err| AppError::InvalidInput(format!("unserializable transaction: {err}")))?;

        client.upsert(&self.collection, &key, payload).await
    }

    /// Delete the transaction at `id`.
    ///
    /// Deleting a missing id or deleting against an unconfigured store is
    /// a successful no-op.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let client = match &self.store {
            Capability::Configured(client) => client,
            Capability::NotConfigured => return Ok(()),
        };

        match client.delete(&self.collection, id).await {
            Err(AppError::NotFound) => Ok(()),
            other => other,
        }
    }
}
