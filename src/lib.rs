//! Money backend - REST API over Firestore transactions and FCM push.
//!
//! Two independent vertical slices share this HTTP entry layer:
//!
//! - **Transactions**: handler → [`services::TransactionService`] →
//!   [`store::DocumentStore`] (Firestore REST adapter)
//! - **Notifications**: handler → [`services::NotificationService`] →
//!   [`push::PushClient`] (FCM adapter)
//!
//! There is no shared state between the slices; everything mutable lives
//! in the external store. Either collaborator may be absent at startup, in
//! which case its slice serves degraded responses instead of refusing to
//! boot.

pub mod capability;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod push;
pub mod services;
pub mod store;

// Re-export for convenient importing
pub use crate::capability::Capability;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::{NotificationService, TransactionService};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub transactions: Arc<TransactionService>,
    pub notifications: Arc<NotificationService>,
}

/// Build the HTTP router.
///
/// Separated from `main` so integration tests can drive the exact
/// production routing against fake clients.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Public health endpoint
        .route("/health", get(handlers::health::health_check))
        // Transaction routes
        .route(
            "/api/transactions",
            get(handlers::transactions::list_transactions),
        )
        .route(
            "/api/transactions",
            post(handlers::transactions::save_transaction),
        )
        .route(
            "/api/transactions/{id}",
            delete(handlers::transactions::delete_transaction),
        )
        // Notification route
        .route("/api/fcm/send", post(handlers::fcm::send_notification))
        // The web and mobile frontends are served from other origins
        .layer(CorsLayer::permissive())
        // Add request tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
