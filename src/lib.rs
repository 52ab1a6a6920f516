//! # GEM Site
//!
//! Static site generator for the La Católica GEM school website: a home page
//! and four level pages (Inicial, Primaria, Secundaria, Ciclo Vacacional).
//! Copy and layout are fixed in code. Photos are the only dynamic content and
//! come from a single shared document that maps image slot keys to Google
//! Drive file identifiers.
//!
//! # Architecture
//!
//! ```text
//! route ──▶ PageView::mount ──thread──▶ DocumentStore::get(imagenes/image)
//!               │                                 │
//!               ▼                                 ▼
//!          sections render        ImageConfig (empty on any failure)
//!               │                                 │
//!               └──── resolve_image_url(id) ◀─────┘
//!                          │
//!                          ▼
//!             images.weserv.nl proxy URL in markup
//! ```
//!
//! Each page view reads the document exactly once. There is no shared cache
//! across pages, no retry and no timeout. A missing document or a failed read
//! is logged and the page renders without images.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`router`] | The five site paths and their pages |
//! | [`loader`] | Per-view one-shot fetch of the image configuration |
//! | [`store`] | `DocumentStore` trait with Firestore REST and local-directory backends |
//! | [`resolve`] | Drive id to proxied display URL |
//! | [`types`] | `ImageConfig` and its lookup |
//! | [`pages`] | Page components, one module per route |
//! | [`slideshow`] | Interval-driven image rotation |
//! | [`shell`] | Document skeleton, header navigation, footer |
//! | [`generate`] | Renders every route into the output directory |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Malformed markup
//! is a build error, interpolation is escaped, and there is no template
//! directory to ship.
//!
//! ## No Image Is Not An Error
//!
//! Every image slot has two states: a URL, or nothing. Empty URLs render a
//! placeholder block or omit the background style; an `<img>` with an empty
//! `src` is never emitted.

pub mod config;
pub mod generate;
pub mod loader;
pub mod output;
pub mod pages;
pub mod resolve;
pub mod router;
pub mod shell;
pub mod slideshow;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
