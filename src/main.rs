//! Money backend - Main Application Entry Point
//!
//! REST API server persisting financial transactions in Firestore and
//! dispatching push notifications through FCM.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Persistence**: Firestore via its REST API (reqwest)
//! - **Push**: FCM legacy HTTP send endpoint (reqwest)
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Construct the Firestore and FCM clients (or mark them unconfigured)
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use money_server::{
    AppState, Capability,
    config::Config,
    push::{PushClient, fcm::FcmClient},
    router,
    services::{NotificationService, TransactionService},
    store::{DocumentStore, firestore::FirestoreClient},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Wire up the document store capability
    let store: Capability<dyn DocumentStore> = match config.gcp_project_id {
        Some(ref project_id) => {
            let client = FirestoreClient::new(
                project_id,
                config.gcp_access_token.clone(),
                config.firestore_emulator_host.as_deref(),
            )?;
            tracing::info!(project = %project_id, "Firestore client configured");
            Capability::Configured(Arc::new(client))
        }
        None => {
            tracing::warn!("GCP_PROJECT_ID not set, transaction store disabled");
            Capability::NotConfigured
        }
    };

    // Wire up the push messaging capability
    let push: Capability<dyn PushClient> = match config.fcm_server_key {
        Some(ref server_key) => {
            let client = FcmClient::new(server_key.clone())?;
            tracing::info!("FCM client configured");
            Capability::Configured(Arc::new(client))
        }
        None => {
            tracing::warn!("FCM_SERVER_KEY not set, push dispatch disabled");
            Capability::NotConfigured
        }
    };

    let state = AppState {
        transactions: Arc::new(TransactionService::new(store)),
        notifications: Arc::new(NotificationService::new(push)),
    };

    let app = router(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
