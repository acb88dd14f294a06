//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.
//!
//! Every layer below the HTTP handlers returns `Result<T, AppError>`. Two
//! legacy response contracts flatten errors back into strings (the degraded
//! save message and the fcm `"Error: ..."` result); that flattening happens
//! in the handlers, never here and never in the services.

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Which external collaborator produced a provider error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// The document store (Firestore).
    Store,
    /// The push messaging provider (FCM).
    Messaging,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Store => write!(f, "document store"),
            ProviderKind::Messaging => write!(f, "messaging"),
        }
    }
}

/// Application-wide error type.
///
/// # Error Categories
///
/// - **NotConfigured**: a backing service was absent at startup
/// - **NotFound**: a document the caller named does not exist
/// - **Provider**: the external service call itself failed
/// - **InvalidInput**: the request data is unusable
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The backing store or push provider was not configured at startup.
    ///
    /// Returns HTTP 503 Service Unavailable, except where a handler
    /// preserves a legacy body (see `handlers`).
    #[error("backing service is not configured")]
    NotConfigured,

    /// A document addressed by key does not exist.
    ///
    /// Returns HTTP 404 Not Found. The transaction service swallows this
    /// for deletes, so it only escapes where a lookup genuinely failed.
    #[error("document not found")]
    NotFound,

    /// An external service call failed.
    ///
    /// Carries the failure origin so callers can tell a store outage from
    /// a messaging outage. Returns HTTP 502 Bad Gateway.
    #[error("{origin} error: {message}")]
    Provider {
        origin: ProviderKind,
        message: String,
    },

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{0}")]
    InvalidInput(String),
}

impl AppError {
    /// Wrap a document-store failure.
    pub fn store(err: impl fmt::Display) -> Self {
        AppError::Provider {
            origin: ProviderKind::Store,
            message: err.to_string(),
        }
    }

    /// Wrap a push-provider failure.
    pub fn messaging(err: impl fmt::Display) -> Self {
        AppError::Provider {
            origin: ProviderKind::Messaging,
            message: err.to_string(),
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `NotConfigured` → 503 Service Unavailable
/// - `NotFound` → 404 Not Found
/// - `Provider` → 502 Bad Gateway
/// - `InvalidInput` → 400 Bad Request
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::NotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                "not_configured",
                self.to_string(),
            ),
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::Provider { .. } => {
                tracing::error!("upstream failure: {self}");
                (StatusCode::BAD_GATEWAY, "upstream_error", self.to_string())
            }
            AppError::InvalidInput(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
