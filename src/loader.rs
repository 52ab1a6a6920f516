//! Per-page image configuration loading.
//!
//! Every page view reads the shared image document once, on mount. The read
//! runs on its own thread so sections can render straight away with an empty
//! configuration; the result arrives over a channel and is applied by
//! [`PageView::poll`] or [`PageView::settle`].
//!
//! ```text
//! mount ──spawn──▶ worker: store.get(imagenes/image)
//!   │                        │
//!   │ render (no images)     │ send(ImageConfig)
//!   ▼                        ▼
//! poll/settle ◀──────────── channel ── applied once, if still mounted
//! ```
//!
//! Failures never reach the viewer. A missing document or a read error is
//! logged and leaves the view with an empty configuration for its whole
//! lifetime. Nothing is retried, and views never share results.

use crate::router::Route;
use crate::store::DocumentStore;
use crate::types::{IMAGE_DOCUMENT, ImageConfig};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

/// Read the image document once and turn it into an [`ImageConfig`].
///
/// Never fails: a missing document or a store error yields an empty config
/// and a log line.
pub fn load_image_config(store: &dyn DocumentStore) -> ImageConfig {
    match store.get(IMAGE_DOCUMENT) {
        Ok(Some(fields)) => {
            log::debug!("loaded {} image ids from {}", fields.len(), IMAGE_DOCUMENT);
            fields.into_iter().collect()
        }
        Ok(None) => {
            log::warn!("document '{IMAGE_DOCUMENT}' not found; rendering without images");
            ImageConfig::new()
        }
        Err(err) => {
            log::error!("failed to load images from '{IMAGE_DOCUMENT}': {err}");
            ImageConfig::new()
        }
    }
}

/// One mounted rendering of a page.
///
/// Owns the page's local state: the image configuration and the time the
/// slideshow timers have been running. Dropping or unmounting the view
/// discards any fetch still in flight.
pub struct PageView {
    route: Route,
    config: ImageConfig,
    pending: Option<Receiver<ImageConfig>>,
    mounted: bool,
    elapsed: Duration,
}

impl PageView {
    /// Mount a view for `route` and start its one-shot fetch.
    pub fn mount(route: Route, store: Arc<dyn DocumentStore>) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let config = load_image_config(store.as_ref());
            // The receiver is gone once the view unmounts; the late result is dropped.
            let _ = tx.send(config);
        });
        Self {
            route,
            config: ImageConfig::new(),
            pending: Some(rx),
            mounted: true,
            elapsed: Duration::ZERO,
        }
    }

    /// Apply the fetch result if it has arrived. Returns `true` when the
    /// configuration changed and the page should re-render.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        match rx.try_recv() {
            Ok(config) => {
                self.apply(config);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                false
            }
        }
    }

    /// Block until the fetch finishes and apply its result.
    pub fn settle(&mut self) {
        if let Some(rx) = self.pending.take() {
            if let Ok(config) = rx.recv() {
                self.apply(config);
            }
        }
    }

    fn apply(&mut self, config: ImageConfig) {
        self.pending = None;
        if !self.mounted {
            return;
        }
        self.config = config;
        // Slideshow timers restart once the image set changes.
        self.elapsed = Duration::ZERO;
    }

    /// Advance the view's clock. Has no effect once unmounted.
    pub fn tick(&mut self, dt: Duration) {
        if self.mounted {
            self.elapsed += dt;
        }
    }

    /// Stop timers and drop any fetch still in flight.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.pending = None;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn config(&self) -> &ImageConfig {
        &self.config
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}
