//! Shared test utilities: in-memory document stores with controllable
//! behaviour, and small HTML assertions.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let store = Arc::new(MemoryStore::with_images(&[("hero", "ABC123")]));
//! let mut view = PageView::mount(Route::Home, store.clone());
//! view.settle();
//! assert_eq!(store.reads(), 1);
//! ```

use crate::store::{DocumentStore, Fields, StoreError};
use crate::types::{DocumentPath, IMAGE_DOCUMENT, ImageConfig};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex};

// =========================================================================
// Stores
// =========================================================================

/// Holds at most the image document, counting reads.
#[derive(Default)]
pub struct MemoryStore {
    image_doc: Option<Fields>,
    reads: AtomicUsize,
}

impl MemoryStore {
    /// Store whose image document has the given fields.
    pub fn with_images(pairs: &[(&str, &str)]) -> Self {
        Self {
            image_doc: Some(fields(pairs)),
            reads: AtomicUsize::new(0),
        }
    }

    /// Store where the image document does not exist.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl DocumentStore for MemoryStore {
    fn get(&self, path: DocumentPath) -> Result<Option<Fields>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if path == IMAGE_DOCUMENT {
            Ok(self.image_doc.clone())
        } else {
            Ok(None)
        }
    }

    fn describe(&self) -> String {
        "memory store".into()
    }
}

/// Every read fails as a transport error would.
#[derive(Default)]
pub struct FailingStore {
    reads: AtomicUsize,
}

impl FailingStore {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl DocumentStore for FailingStore {
    fn get(&self, path: DocumentPath) -> Result<Option<Fields>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Status {
            status: 503,
            path: path.to_string(),
        })
    }

    fn describe(&self) -> String {
        "failing store".into()
    }
}

/// Blocks every read until [`GatedStore::release`] is called.
pub struct GatedStore {
    fields: Fields,
    open: Mutex<bool>,
    signal: Condvar,
}

impl GatedStore {
    pub fn new(pairs: &[(&str, &str)]) -> Arc<Self> {
        Arc::new(Self {
            fields: fields(pairs),
            open: Mutex::new(false),
            signal: Condvar::new(),
        })
    }

    pub fn release(&self) {
        *self.open.lock().unwrap() = true;
        self.signal.notify_all();
    }
}

impl DocumentStore for GatedStore {
    fn get(&self, _path: DocumentPath) -> Result<Option<Fields>, StoreError> {
        let mut open = self.open.lock().unwrap();
        while !*open {
            open = self.signal.wait(open).unwrap();
        }
        Ok(Some(self.fields.clone()))
    }

    fn describe(&self) -> String {
        "gated store".into()
    }
}

// =========================================================================
// Builders and assertions
// =========================================================================

pub fn fields(pairs: &[(&str, &str)]) -> Fields {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn image_config(pairs: &[(&str, &str)]) -> ImageConfig {
    fields(pairs).into_iter().collect()
}

/// Number of non-overlapping occurrences of `needle` in `html`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Assert that rendered HTML never emits an `<img>` without a source.
pub fn assert_no_empty_img(html: &str) {
    assert!(
        !html.contains(r#"src="""#),
        "found an element with an empty src attribute"
    );
}
