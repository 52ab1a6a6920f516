//! HTML site generation.
//!
//! Renders every route of the site into a static directory. Each page gets
//! its own [`PageView`]: mounted, settled on its single document read, then
//! rendered and unmounted. Pages are independent, so they render in parallel
//! on the global rayon pool.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                    # Home
//! ├── inicial/index.html
//! ├── primaria/index.html
//! ├── secundaria/index.html
//! ├── ciclo-vacacional/index.html
//! └── assets/
//!     ├── style-1a2b3c4d.css        # Colors from config.toml + static/style.css
//!     └── slideshow.js
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors injected from config)
//! - `static/slideshow.js`: Client-side rotation for `.slideshow` elements
//!
//! The stylesheet name carries the first 8 hex digits of its SHA-256 so a
//! changed palette never hits a stale cached copy.

use crate::config::{self, SiteConfig};
use crate::loader::PageView;
use crate::pages::{self, PageContext};
use crate::router::Route;
use crate::shell::{self, Assets};
use crate::store::DocumentStore;
use maud::Markup;
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/slideshow.js");

const SCRIPT_PATH: &str = "assets/slideshow.js";

/// One written page.
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    pub route: Route,
    /// Path relative to the output directory.
    pub file: String,
    /// Number of image keys the page's fetch produced.
    pub image_keys: usize,
}

#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub pages: Vec<GeneratedPage>,
    pub assets: Assets,
}

/// Full stylesheet: color variables followed by the static rules.
pub fn stylesheet(config: &SiteConfig) -> String {
    let color_css = config::generate_color_css(&config.colors);
    format!("{}\n\n{}", color_css, CSS_STATIC)
}

/// First 8 hex digits of the SHA-256 of `content`.
pub fn fingerprint(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    let hex = format!("{:x}", digest);
    hex[..8].to_string()
}

/// Asset locations for a given stylesheet body.
pub fn assets_for(css: &str) -> Assets {
    Assets {
        stylesheet: format!("assets/style-{}.css", fingerprint(css)),
        script: SCRIPT_PATH.to_string(),
    }
}

/// Wrap a view's current state in the full document.
pub fn render_view(view: &PageView, config: &SiteConfig, assets: &Assets) -> Markup {
    let route = view.route();
    let ctx = PageContext::from_view(view, config.slideshow.interval());
    let title = format!("{} | {}", route.title(), config.site.title);
    shell::base_document(
        &title,
        &config.site.lang,
        assets,
        route,
        pages::render(route, &ctx),
    )
}

/// Mount `route`, wait for its fetch, let `elapsed` pass and render.
///
/// The view is unmounted before returning; nothing outlives the call.
pub fn render_route(
    route: Route,
    store: Arc<dyn DocumentStore>,
    config: &SiteConfig,
    elapsed: Duration,
) -> Markup {
    let css = stylesheet(config);
    let assets = assets_for(&css);
    let mut view = PageView::mount(route, store);
    view.settle();
    view.tick(elapsed);
    let markup = render_view(&view, config, &assets);
    view.unmount();
    markup
}

pub fn generate(
    config: &SiteConfig,
    store: Arc<dyn DocumentStore>,
    output_dir: &Path,
) -> Result<GenerateResult, GenerateError> {
    let css = stylesheet(config);
    let assets = assets_for(&css);

    fs::create_dir_all(output_dir.join("assets"))?;
    write_file(&output_dir.join(&assets.stylesheet), &css)?;
    write_file(&output_dir.join(&assets.script), JS)?;

    let pages = Route::ALL
        .par_iter()
        .map(|&route| {
            let mut view = PageView::mount(route, Arc::clone(&store));
            view.settle();
            let html = render_view(&view, config, &assets);
            let image_keys = view.config().len();
            view.unmount();

            let file = route.output_file();
            let path = output_dir.join(&file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            write_file(&path, &html.into_string())?;
            log::debug!("rendered {} into {}", route, file);
            Ok(GeneratedPage {
                route,
                file,
                image_keys,
            })
        })
        .collect::<Result<Vec<_>, GenerateError>>()?;

    Ok(GenerateResult { pages, assets })
}

fn write_file(path: &Path, contents: &str) -> Result<(), GenerateError> {
    fs::write(path, contents).map_err(|source| GenerateError::Write {
        path: path.display().to_string(),
        source,
    })
}
