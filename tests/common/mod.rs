#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{
    Arc, Mutex, RwLock,
    atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, Bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use tower::util::ServiceExt;

use money_server::{
    AppState, Capability,
    error::AppError,
    push::{PushClient, PushNotification},
    services::{NotificationService, TransactionService},
    store::DocumentStore,
};

/// In-memory [`DocumentStore`] standing in for Firestore.
///
/// Collections are maps of key -> payload. Upserts hand back a synthetic
/// write timestamp so tests can assert the save contract, and deletes of
/// missing keys answer `NotFound` exactly like the production adapter.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<BTreeMap<String, BTreeMap<String, Value>>>,
    writes: AtomicU64,
}

impl InMemoryDocumentStore {
    /// Place a payload directly into the store, bypassing the service.
    pub fn seed(&self, collection: &str, key: &str, payload: Value) {
        let mut collections = self.collections.write().unwrap();
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), payload);
    }

    pub fn document_count(&self, collection: &str) -> usize {
        let collections = self.collections.read().unwrap();
        collections.get(collection).map_or(0, BTreeMap::len)
    }

    pub fn document(&self, collection: &str, key: &str) -> Option<Value> {
        let collections = self.collections.read().unwrap();
        collections
            .get(collection)
            .and_then(|documents| documents.get(key))
            .cloned()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn list_documents(&self, collection: &str) -> Result<Vec<(String, Value)>, AppError> {
        let collections = self.collections.read().unwrap();
        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .map(|(key, payload)| (key.clone(), payload.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn upsert(
        &self,
        collection: &str,
        key: &str,
        payload: Value,
    ) -> Result<String, AppError> {
        self.seed(collection, key, payload);
        let sequence = self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(format!("2026-01-01T00:00:00.{sequence:06}Z"))
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<(), AppError> {
        let mut collections = self.collections.write().unwrap();
        let removed = collections
            .get_mut(collection)
            .and_then(|documents| documents.remove(key));

        match removed {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound),
        }
    }
}

/// Recording [`PushClient`] fake.
///
/// Captures every send; can be constructed failing to exercise the
/// provider-error contract.
#[derive(Default)]
pub struct RecordingPushClient {
    pub token_sends: Mutex<Vec<(String, PushNotification)>>,
    pub topic_sends: Mutex<Vec<(String, PushNotification)>>,
    fail_with: Option<String>,
}

impl RecordingPushClient {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl PushClient for RecordingPushClient {
    async fn send_to_token(
        &self,
        token: &str,
        notification: &PushNotification,
    ) -> Result<String, AppError> {
        if let Some(ref message) = self.fail_with {
            return Err(AppError::messaging(message));
        }
        self.token_sends
            .lock()
            .unwrap()
            .push((token.to_string(), notification.clone()));
        Ok("0:1500004500000000%e608a2bc".to_string())
    }

    async fn send_to_topic(
        &self,
        topic: &str,
        notification: &PushNotification,
    ) -> Result<String, AppError> {
        if let Some(ref message) = self.fail_with {
            return Err(AppError::messaging(message));
        }
        self.topic_sends
            .lock()
            .unwrap()
            .push((topic.to_string(), notification.clone()));
        Ok("7023577959008557".to_string())
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryDocumentStore>,
    pub push: Arc<RecordingPushClient>,
}

/// Build the production router against in-memory fakes.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with_push(Arc::new(RecordingPushClient::default()))
}

pub fn setup_test_app_with_push(push: Arc<RecordingPushClient>) -> TestApp {
    let store = Arc::new(InMemoryDocumentStore::default());

    let state = AppState {
        transactions: Arc::new(TransactionService::new(Capability::Configured(
            store.clone() as Arc<dyn DocumentStore>,
        ))),
        notifications: Arc::new(NotificationService::new(Capability::Configured(
            push.clone() as Arc<dyn PushClient>,
        ))),
    };

    TestApp {
        router: money_server::router(state),
        store,
        push,
    }
}

/// Build the router with both capabilities absent.
pub fn setup_degraded_app() -> Router {
    let state = AppState {
        transactions: Arc::new(TransactionService::new(Capability::NotConfigured)),
        notifications: Arc::new(NotificationService::new(Capability::NotConfigured)),
    };

    money_server::router(state)
}

/// Fire one request at the router and collect the response.
pub async fn request(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Bytes) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes)
}

pub fn json_body(bytes: &Bytes) -> Value {
    serde_json::from_slice(bytes).unwrap()
}
