//! FCM adapter for the [`PushClient`] trait.
//!
//! Uses the legacy HTTP send endpoint: one `POST` per message,
//! authenticated with the project's server key. Token sends answer with a
//! `results` array (message id or an error code such as
//! `InvalidRegistration`); topic sends answer with a top-level numeric
//! `message_id`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::push::{PushClient, PushNotification};

const FCM_SEND_URL: &str = "https://fcm.googleapis.com/fcm/send";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// FCM legacy HTTP client.
pub struct FcmClient {
    http: reqwest::Client,
    server_key: String,
}

impl FcmClient {
    pub fn new(server_key: String) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(AppError::messaging)?;

        Ok(Self { http, server_key })
    }

    /// Send one message and extract the provider message id.
    async fn dispatch(
        &self,
        recipient: String,
        notification: &PushNotification,
    ) -> Result<String, AppError> {
        let message = FcmMessage {
            to: recipient,
            notification,
        };

        let response = self
            .http
            .post(FCM_SEND_URL)
            .header("Authorization", format!("key={}", self.server_key))
            .json(&message)
            .send()
            .await
            .map_err(AppError::messaging)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::messaging(format!("HTTP {status}: {body}")));
        }

        let body: FcmResponse = response.json().await.map_err(AppError::messaging)?;
        message_id_from(body)
    }
}

#[async_trait]
impl PushClient for FcmClient {
    async fn send_to_token(
        &self,
        token: &str,
        notification: &PushNotification,
    ) -> Result<String, AppError> {
        self.dispatch(token.to_string(), notification).await
    }

    async fn send_to_topic(
        &self,
        topic: &str,
        notification: &PushNotification,
    ) -> Result<String, AppError> {
        // Topic addressing uses the /topics/ prefix in the recipient field
        self.dispatch(format!("/topics/{topic}"), notification).await
    }
}

#[derive(Debug, Serialize)]
struct FcmMessage<'a> {
    to: String,
    notification: &'a PushNotification,
}

/// Union of the two legacy response shapes.
#[derive(Debug, Deserialize)]
struct FcmResponse {
    /// Topic sends: numeric message id
    #[serde(default)]
    message_id: Option<Value>,
    /// Token sends: one entry per recipient
    #[serde(default)]
    results: Vec<FcmResult>,
}

#[derive(Debug, Deserialize)]
struct FcmResult {
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn message_id_from(response: FcmResponse) -> Result<String, AppError> {
    if let Some(id) = response.message_id {
        // The topic form is a JSON number; render it without quotes
        return Ok(match id {
            Value::String(text) => text,
            other => other.to_string(),
        });
    }

    match response.results.into_iter().next() {
        Some(FcmResult {
            message_id: Some(id),
            ..
        }) => Ok(id),
        Some(FcmResult {
            error: Some(code), ..
        }) => Err(AppError::messaging(code)),
        _ => Err(AppError::messaging("response contained no message id")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(raw: Value) -> Result<String, AppError> {
        message_id_from(serde_json::from_value(raw).unwrap())
    }

    #[test]
    fn topic_response_yields_numeric_id() {
        let id = parse(json!({ "message_id": 6177_i64 })).unwrap();
        assert_eq!(id, "6177");
    }

    #[test]
    fn token_response_yields_result_id() {
        let id = parse(json!({
            "multicast_id": 108,
            "success": 1,
            "failure": 0,
            "results": [{ "message_id": "0:1500000000000000%e608a2bc" }]
        }))
        .unwrap();
        assert_eq!(id, "0:1500000000000000%e608a2bc");
    }

    #[test]
    fn token_error_code_becomes_provider_error() {
        let err = parse(json!({
            "multicast_id": 108,
            "success": 0,
            "failure": 1,
            "results": [{ "error": "InvalidRegistration" }]
        }))
        .unwrap_err();

        assert!(matches!(err, AppError::Provider { .. }));
        assert!(err.to_string().contains("InvalidRegistration"));
    }

    #[test]
    fn empty_response_is_an_error() {
        assert!(parse(json!({})).is_err());
    }

    #[test]
    fn topic_message_serializes_with_prefix() {
        let notification = PushNotification {
            title: "Hi".into(),
            body: "There".into(),
        };
        let message = FcmMessage {
            to: "/topics/all".into(),
            notification: &notification,
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "to": "/topics/all",
                "notification": { "title": "Hi", "body": "There" }
            })
        );
    }
}
