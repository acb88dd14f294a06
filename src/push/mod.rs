//! Push messaging abstraction.
//!
//! Notification dispatch goes through the [`PushClient`] trait: one method
//! per addressing mode (device token or broadcast topic). The production
//! implementation is the FCM adapter in [`fcm`]; tests substitute a
//! recording fake.

pub mod fcm;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::AppError;

/// Title/body pair delivered to devices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PushNotification {
    pub title: String,
    pub body: String,
}

/// Contract for an external push messaging provider.
///
/// Both methods return the provider's message id as an opaque string.
#[async_trait]
pub trait PushClient: Send + Sync {
    /// Deliver to a single device registration token.
    async fn send_to_token(
        &self,
        token: &str,
        notification: &PushNotification,
    ) -> Result<String, AppError>;

    /// Deliver to every device subscribed to `topic`.
    async fn send_to_topic(
        &self,
        topic: &str,
        notification: &PushNotification,
    ) -> Result<String, AppError>;
}
