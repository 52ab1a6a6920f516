//! Shared types used across the store, loader and page renderers.

use crate::resolve;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Location of a document in the store: `collection/document`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentPath {
    pub collection: &'static str,
    pub document: &'static str,
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.document)
    }
}

/// The one document every page reads its image ids from.
pub const IMAGE_DOCUMENT: DocumentPath = DocumentPath {
    collection: "imagenes",
    document: "image",
};

/// Semantic image key → opaque image identifier.
///
/// One instance per page view. Starts empty, is replaced at most once by a
/// successful fetch, and is never written back to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageConfig(BTreeMap<String, String>);

impl ImageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw identifier for a key. Empty identifiers count as missing.
    pub fn id(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Lookup function handed to sections.
    pub fn lookup(&self) -> ImageLookup<'_> {
        ImageLookup { config: self }
    }
}

impl FromIterator<(String, String)> for ImageConfig {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// `key -> URL` view over an [`ImageConfig`].
///
/// Resolves through [`resolve::resolve_image_url`] on every call.
#[derive(Debug, Clone, Copy)]
pub struct ImageLookup<'a> {
    config: &'a ImageConfig,
}

impl ImageLookup<'_> {
    /// Display URL for `key`, or `""` when the slot has no image.
    pub fn url(&self, key: &str) -> String {
        self.config
            .id(key)
            .map(resolve::resolve_image_url)
            .unwrap_or_default()
    }

    /// Non-empty URLs for `keys`, in order. Slots without an image are dropped.
    pub fn urls(&self, keys: &[&str]) -> Vec<String> {
        keys.iter()
            .map(|key| self.url(key))
            .filter(|url| !url.is_empty())
            .collect()
    }
}
