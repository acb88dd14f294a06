//! Health check endpoint for service monitoring.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AppState;

/// Health check response.
///
/// Reports which external capabilities were wired up at startup. There is
/// no connectivity probe: both collaborators are reached lazily, per
/// request.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Whether the transaction store was configured
    pub firestore: String,

    /// Whether push dispatch was configured
    pub fcm: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "firestore": "configured",
///   "fcm": "not_configured",
///   "timestamp": "2026-08-07T09:00:00Z"
/// }
/// ```
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    fn label(configured: bool) -> String {
        let text = if configured {
            "configured"
        } else {
            "not_configured"
        };
        text.to_string()
    }

    Json(HealthResponse {
        status: "healthy".to_string(),
        firestore: label(state.transactions.is_configured()),
        fcm: label(state.notifications.is_configured()),
        timestamp: Utc::now(),
    })
}
