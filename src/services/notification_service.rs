//! Notification service - push dispatch through the messaging provider.

use crate::capability::Capability;
use crate::error::AppError;
use crate::push::{PushClient, PushNotification};

/// Topic every client device subscribes to; used for broadcasts.
const BROADCAST_TOPIC: &str = "all";

pub struct NotificationService {
    push: Capability<dyn PushClient>,
}

impl NotificationService {
    pub fn new(push: Capability<dyn PushClient>) -> Self {
        Self { push }
    }

    pub fn is_configured(&self) -> bool {
        self.push.is_configured()
    }

    /// Deliver a notification to a single device token.
    ///
    /// # Errors
    ///
    /// - `NotConfigured`: no push provider was configured
    /// - `Provider`: the provider rejected the send (invalid token, quota,
    ///   network failure)
    pub async fn send_to_token(
        &self,
        token: &str,
        title: &str,
        body: &str,
    ) -> Result<String, AppError> {
        let client = self.push.get()?;
        let notification = PushNotification {
            title: title.to_string(),
            body: body.to_string(),
        };

        client.send_to_token(token, &notification).await
    }

    /// Deliver a notification to every device subscribed to the broadcast
    /// topic.
    pub async fn send_broadcast(&self, title: &str, body: &str) -> Result<String, AppError> {
        let client = self.push.get()?;
        let notification = PushNotification {
            title: title.to_string(),
            body: body.to_string(),
        };

        client.send_to_topic(BROADCAST_TOPIC, &notification).await
    }
}
