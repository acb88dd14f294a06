//! Transaction HTTP handlers.
//!
//! This module implements the transaction API endpoints:
//! - GET /api/transactions - List every transaction
//! - POST /api/transactions - Create or replace a transaction
//! - DELETE /api/transactions/{id} - Delete a transaction

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{AppState, error::AppError, models::transaction::Transaction};

/// List every transaction in the collection.
///
/// # Response (200)
///
/// ```json
/// [
///   {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "type": "minus",
///     "amount": 42.5,
///     "category": "groceries",
///     "date": "2026-08-01T12:30:00Z"
///   }
/// ]
/// ```
///
/// An unconfigured store yields `[]`, not an error. The whole collection
/// is loaded into memory; there is no pagination.
pub async fn list_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let transactions = state.transactions.list_all().await?;
    Ok(Json(transactions))
}

/// Create or replace a transaction.
///
/// # Request Body
///
/// A Transaction JSON object. `id` is optional; when absent a random UUID
/// is assigned and used as the document key. A pre-set `id` overwrites
/// whatever is stored at that key.
///
/// # Response (200)
///
/// Plain-text write timestamp, e.g. `2026-08-07T09:00:00.123456Z`.
///
/// When the store is unconfigured the response is still 200 with the body
/// `Firestore not initialized` - the mobile clients parse this exact
/// string, so only this handler may produce it.
pub async fn save_transaction(
    State(state): State<AppState>,
    Json(transaction): Json<Transaction>,
) -> Result<String, AppError> {
    match state.transactions.save(transaction).await {
        Ok(write_time) => Ok(write_time),
        Err(AppError::NotConfigured) => Ok("Firestore not initialized".to_string()),
        Err(err) => Err(err),
    }
}

/// Delete a transaction by id.
///
/// # Response
///
/// 204 No Content, including when the id does not exist or the store is
/// unconfigured.
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.transactions.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
