//! Read-only access to the remote document store.
//!
//! The site reads exactly one document (see [`crate::types::IMAGE_DOCUMENT`])
//! and treats it as a flat map of string fields. Two backends implement
//! [`DocumentStore`]:
//!
//! - [`FirestoreStore`]: the Firestore REST API, used for real builds.
//! - [`LocalStore`]: `<root>/<collection>/<document>.json` on disk, for
//!   offline builds and tests.
//!
//! "Document does not exist" is `Ok(None)`, distinct from a read failure.
//! Field values are duck-typed: strings are kept, integers become their
//! decimal text, everything else is skipped.

use crate::config::StoreConfig;
use crate::types::DocumentPath;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Flat string fields of one document.
pub type Fields = BTreeMap<String, String>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("document store returned {status} for {path}")]
    Status { status: u16, path: String },
    #[error("malformed document {path}: {reason}")]
    Malformed { path: String, reason: String },
}

/// A read-only key/document provider.
pub trait DocumentStore: Send + Sync {
    /// Read one document. `Ok(None)` means it does not exist.
    fn get(&self, path: DocumentPath) -> Result<Option<Fields>, StoreError>;

    /// Short human description for CLI output.
    fn describe(&self) -> String;
}

// ============================================================================
// Firestore REST backend
// ============================================================================

/// Firestore over its REST API.
///
/// No request timeout is set. reqwest's blocking client defaults to 30s, so
/// it is cleared explicitly; a hung read simply never resolves.
pub struct FirestoreStore {
    client: reqwest::blocking::Client,
    timeout: Option<Duration>,
    endpoint: String,
    project_id: String,
    api_key: Option<String>,
}

impl FirestoreStore {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        Self::with_timeout(config, None)
    }

    /// Like [`FirestoreStore::new`] with an explicit request timeout.
    pub fn with_timeout(
        config: &StoreConfig,
        timeout: Option<Duration>,
    ) -> Result<Self, StoreError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("gem-site/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            timeout,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Request timeout applied to every read, `None` for unbounded.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// REST URL of a document, without the API key.
    pub fn document_url(&self, path: DocumentPath) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}/{}",
            self.endpoint, self.project_id, path.collection, path.document
        )
    }
}

impl DocumentStore for FirestoreStore {
    fn get(&self, path: DocumentPath) -> Result<Option<Fields>, StoreError> {
        let mut request = self.client.get(self.document_url(path));
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }
        let response = request.send()?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        let body = response.text()?;
        parse_firestore_document(&body).map(Some)
    }

    fn describe(&self) -> String {
        format!("firestore project {}", self.project_id)
    }
}

/// Firestore REST document body. Only `fields` matters here.
#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    #[serde(default)]
    fields: BTreeMap<String, serde_json::Value>,
}

/// Flatten a Firestore REST document into string fields.
///
/// Each field is a one-key object such as `{"stringValue": "abc"}`.
/// `integerValue` arrives as a decimal string and is kept as-is.
pub fn parse_firestore_document(body: &str) -> Result<Fields, StoreError> {
    let doc: FirestoreDocument = serde_json::from_str(body)?;
    let mut fields = Fields::new();
    for (name, value) in doc.fields {
        let text = value
            .get("stringValue")
            .or_else(|| value.get("integerValue"))
            .and_then(|v| v.as_str());
        match text {
            Some(text) => {
                fields.insert(name, text.to_string());
            }
            None => log::debug!("skipping non-string field {name:?}"),
        }
    }
    Ok(fields)
}

// ============================================================================
// Local JSON backend
// ============================================================================

/// Documents stored as `<root>/<collection>/<document>.json` flat objects.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn document_file(&self, path: DocumentPath) -> PathBuf {
        self.root
            .join(path.collection)
            .join(format!("{}.json", path.document))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentStore for LocalStore {
    fn get(&self, path: DocumentPath) -> Result<Option<Fields>, StoreError> {
        let file = self.document_file(path);
        if !file.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&file)?;
        parse_flat_document(&content, path).map(Some)
    }

    fn describe(&self) -> String {
        format!("local store {}", self.root.display())
    }
}

/// Parse a flat JSON object into string fields.
pub fn parse_flat_document(content: &str, path: DocumentPath) -> Result<Fields, StoreError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let serde_json::Value::Object(map) = value else {
        return Err(StoreError::Malformed {
            path: path.to_string(),
            reason: "expected a JSON object".into(),
        });
    };
    let mut fields = Fields::new();
    for (name, value) in map {
        match value {
            serde_json::Value::String(s) => {
                fields.insert(name, s);
            }
            serde_json::Value::Number(n) => {
                fields.insert(name, n.to_string());
            }
            _ => log::debug!("skipping non-string field {name:?}"),
        }
    }
    Ok(fields)
}
