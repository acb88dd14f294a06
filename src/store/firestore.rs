//! Firestore REST adapter for the [`DocumentStore`] trait.
//!
//! Talks to the Firestore v1 REST API:
//!
//! - `GET    .../documents/{collection}` lists documents (paged)
//! - `PATCH  .../documents/{collection}/{key}` upserts one document
//! - `DELETE .../documents/{collection}/{key}` deletes one document
//!
//! Firestore does not exchange plain JSON: every field is wrapped in a
//! typed value (`{"amount": {"doubleValue": 42.5}}`). The codec at the
//! bottom of this module converts between plain `serde_json::Value`
//! payloads and that representation, so the rest of the crate never sees
//! Firestore's wire format.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::error::AppError;
use crate::store::DocumentStore;

const PROD_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Firestore REST client.
///
/// Constructed once at startup and shared behind an `Arc`. Auth is a
/// pre-issued OAuth bearer token; against the emulator no token is needed.
pub struct FirestoreClient {
    http: reqwest::Client,
    /// `{base}/projects/{project}/databases/(default)/documents`
    documents_url: String,
    access_token: Option<String>,
}

impl FirestoreClient {
    /// Build a client for the given project.
    ///
    /// When `emulator_host` is set (`host:port`), requests go to the local
    /// emulator over plain HTTP and the token is ignored by the server.
    pub fn new(
        project_id: &str,
        access_token: Option<String>,
        emulator_host: Option<&str>,
    ) -> Result<Self, AppError> {
        let base = match emulator_host {
            Some(host) => format!("http://{host}/v1"),
            None => PROD_BASE_URL.to_string(),
        };

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(AppError::store)?;

        Ok(Self {
            http,
            documents_url: format!("{base}/projects/{project_id}/databases/(default)/documents"),
            access_token,
        })
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, url);
        if let Some(ref token) = self.access_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{collection}", self.documents_url)
    }

    fn document_url(&self, collection: &str, key: &str) -> String {
        format!("{}/{collection}/{key}", self.documents_url)
    }

    /// Read the response body as `T`, or surface a store error carrying the
    /// status and whatever body Firestore returned.
    async fn read_json<T: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(AppError::store)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(AppError::store(format!("HTTP {status}: {body}")))
        }
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn list_documents(&self, collection: &str) -> Result<Vec<(String, Value)>, AppError> {
        let url = self.collection_url(collection);
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        // Firestore pages the listing; follow nextPageToken until the
        // collection is fully materialized.
        loop {
            let mut request = self.request(reqwest::Method::GET, url.clone());
            if let Some(ref token) = page_token {
                request = request.query(&[("pageToken", token)]);
            }
            let response = request.send().await.map_err(AppError::store)?;
            let page: ListDocumentsResponse = Self::read_json(response).await?;

            for document in page.documents {
                let key = document_key(&document.name);
                documents.push((key, decode_fields(&document.fields)));
            }

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(documents)
    }

    async fn upsert(
        &self,
        collection: &str,
        key: &str,
        payload: Value,
    ) -> Result<String, AppError> {
        let fields = encode_fields(&payload)?;
        let response = self
            .request(reqwest::Method::PATCH, self.document_url(collection, key))
            .json(&json!({ "fields": fields }))
            .send()
            .await
            .map_err(AppError::store)?;

        let document: FirestoreDocument = Self::read_json(response).await?;
        document
            .update_time
            .ok_or_else(|| AppError::store("write response missing updateTime"))
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<(), AppError> {
        let response = self
            .request(reqwest::Method::DELETE, self.document_url(collection, key))
            .send()
            .await
            .map_err(AppError::store)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Err(AppError::NotFound)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(AppError::store(format!("HTTP {status}: {body}")))
        }
    }
}

/// Response shape of the list endpoint. An empty collection comes back as
/// `{}`, hence the defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<FirestoreDocument>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FirestoreDocument {
    /// Full resource name; the document key is its last path segment
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
    #[serde(default)]
    update_time: Option<String>,
}

/// Extract the document key from a full resource name like
/// `projects/p/databases/(default)/documents/transactions/abc`.
fn document_key(name: &str) -> String {
    name.rsplit('/').next().unwrap_or(name).to_string()
}

/// Wrap a JSON object's fields into Firestore typed values.
///
/// The payload must be a JSON object; anything else is a caller bug
/// surfaced as `InvalidInput`.
fn encode_fields(payload: &Value) -> Result<Map<String, Value>, AppError> {
    let object = payload
        .as_object()
        .ok_or_else(|| AppError::InvalidInput("document payload must be a JSON object".into()))?;

    Ok(object
        .iter()
        .map(|(name, value)| (name.clone(), encode_value(value)))
        .collect())
}

fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(flag) => json!({ "booleanValue": flag }),
        Value::Number(number) => {
            // Firestore carries integers as decimal strings and doubles as
            // JSON numbers.
            if let Some(integer) = number.as_i64() {
                json!({ "integerValue": integer.to_string() })
            } else if let Some(integer) = number.as_u64() {
                json!({ "integerValue": integer.to_string() })
            } else {
                json!({ "doubleValue": number.as_f64() })
            }
        }
        Value::String(text) => json!({ "stringValue": text }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => {
            let fields: Map<String, Value> = map
                .iter()
                .map(|(name, item)| (name.clone(), encode_value(item)))
                .collect();
            json!({ "mapValue": { "fields": fields } })
        }
    }
}

/// Unwrap Firestore typed values back into a plain JSON object.
fn decode_fields(fields: &Map<String, Value>) -> Value {
    let mut object = Map::with_capacity(fields.len());
    for (name, value) in fields {
        object.insert(name.clone(), decode_value(value));
    }
    Value::Object(object)
}

fn decode_value(value: &Value) -> Value {
    let Some(typed) = value.as_object() else {
        return Value::Null;
    };

    if let Some(text) = typed.get("stringValue").and_then(Value::as_str) {
        return Value::String(text.to_string());
    }
    if let Some(number) = typed.get("doubleValue").and_then(Value::as_f64) {
        return json!(number);
    }
    if let Some(raw) = typed.get("integerValue").and_then(Value::as_str) {
        // Wire format is a decimal string
        if let Ok(integer) = raw.parse::<i64>() {
            return json!(integer);
        }
        return Value::Null;
    }
    if let Some(flag) = typed.get("booleanValue").and_then(Value::as_bool) {
        return Value::Bool(flag);
    }
    if typed.contains_key("nullValue") {
        return Value::Null;
    }
    if let Some(timestamp) = typed.get("timestampValue").and_then(Value::as_str) {
        return Value::String(timestamp.to_string());
    }
    if let Some(reference) = typed.get("referenceValue").and_then(Value::as_str) {
        return Value::String(reference.to_string());
    }
    if let Some(items) = typed
        .get("arrayValue")
        .and_then(|array| array.get("values"))
        .and_then(Value::as_array)
    {
        return Value::Array(items.iter().map(decode_value).collect());
    }
    if let Some(fields) = typed
        .get("mapValue")
        .and_then(|map| map.get("fields"))
        .and_then(Value::as_object)
    {
        return decode_fields(fields);
    }

    // geoPointValue, bytesValue etc. have no JSON counterpart here
    Value::Null
}
