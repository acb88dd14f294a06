//! Request and response payloads for the push notification endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/fcm/send`.
///
/// # JSON Example
///
/// ```json
/// {
///   "token": "device-registration-token",
///   "title": "Budget alert",
///   "body": "You spent more than planned"
/// }
/// ```
///
/// All fields are optional at the serde level so that a missing `title` or
/// `body` reaches the handler and is rejected there with a 400 rather than
/// a deserialization error. `token` is genuinely optional: an absent or
/// empty token selects the broadcast path.
#[derive(Debug, Deserialize)]
pub struct SendNotificationRequest {
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub body: Option<String>,
}

/// Response body for `POST /api/fcm/send`.
///
/// `result` holds the provider message id on success, or the legacy
/// `"Error: ..."` string when dispatch failed.
#[derive(Debug, Serialize)]
pub struct SendNotificationResponse {
    pub result: String,
}
