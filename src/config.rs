//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.
//!
//! All Google-facing settings are optional: a missing `GCP_PROJECT_ID`
//! leaves the transaction store unconfigured, and a missing
//! `FCM_SERVER_KEY` leaves push dispatch unconfigured. The server still
//! boots in either case and the affected endpoints degrade per the
//! service-layer policies.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8080
/// - `GCP_PROJECT_ID` (optional): Google Cloud project owning the Firestore
///   database; absent means the transaction store is unconfigured
/// - `GCP_ACCESS_TOKEN` (optional): OAuth bearer token for Firestore REST
///   calls; unnecessary when targeting the emulator
/// - `FIRESTORE_EMULATOR_HOST` (optional): `host:port` of a local Firestore
///   emulator, e.g. `localhost:8200`
/// - `FCM_SERVER_KEY` (optional): FCM legacy server key; absent means push
///   dispatch is unconfigured
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default)]
    pub gcp_project_id: Option<String>,

    #[serde(default)]
    pub gcp_access_token: Option<String>,

    #[serde(default)]
    pub firestore_emulator_host: Option<String>,

    #[serde(default)]
    pub fcm_server_key: Option<String>,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    8080
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values cannot be parsed
    /// into the expected types (e.g. a non-numeric SERVER_PORT).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: gcp_project_id -> GCP_PROJECT_ID
        envy::from_env::<Config>()
    }
}
