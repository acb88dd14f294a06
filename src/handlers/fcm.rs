//! Push notification HTTP handler.
//!
//! Implements POST /api/fcm/send with the entry-layer dispatch rule: a
//! non-empty `token` selects single-device delivery, anything else selects
//! the broadcast topic.

use axum::{Json, extract::State};

use crate::{
    AppState,
    error::AppError,
    models::notification::{SendNotificationRequest, SendNotificationResponse},
};

/// Send a push notification.
///
/// # Request Body
///
/// ```json
/// {
///   "token": "optional-device-token",
///   "title": "Budget alert",
///   "body": "You spent more than planned"
/// }
/// ```
///
/// # Response (200)
///
/// ```json
/// { "result": "0:1500000000000000%e608a2bc" }
/// ```
///
/// Dispatch failures do NOT fail the request: the clients expect a 200
/// whose `result` begins with `"Error: "`, so provider and not-configured
/// errors are flattened into that string here. Missing or empty
/// `title`/`body` is the one rejected input (400).
pub async fn send_notification(
    State(state): State<AppState>,
    Json(request): Json<SendNotificationRequest>,
) -> Result<Json<SendNotificationResponse>, AppError> {
    let title = request
        .title
        .as_deref()
        .filter(|title| !title.is_empty())
        .ok_or_else(|| AppError::InvalidInput("title is required".to_string()))?;
    let body = request
        .body
        .as_deref()
        .filter(|body| !body.is_empty())
        .ok_or_else(|| AppError::InvalidInput("body is required".to_string()))?;

    // Empty token means broadcast
    let outcome = match request.token.as_deref() {
        Some(token) if !token.is_empty() => {
            state.notifications.send_to_token(token, title, body).await
        }
        _ => state.notifications.send_broadcast(title, body).await,
    };

    let result = match outcome {
        Ok(message_id) => message_id,
        Err(err @ (AppError::NotConfigured | AppError::Provider { .. })) => {
            tracing::warn!("push dispatch failed: {err}");
            format!("Error: {err}")
        }
        Err(err) => return Err(err),
    };

    Ok(Json(SendNotificationResponse { result }))
}
