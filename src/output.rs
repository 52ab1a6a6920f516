//! CLI output formatting.
//!
//! Output is **information-first**: every line leads with the route or key it
//! describes, with files and URLs shown after an arrow or as indented context.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Pages
//! 001 Inicio → index.html (12 image ids)
//! 002 Inicial → inicial/index.html (12 image ids)
//!
//! Assets
//!     assets/style-1a2b3c4d.css
//!     assets/slideshow.js
//!
//! Generated 5 pages
//! ```
//!
//! ## Routes
//!
//! ```text
//! 001 / → Inicio
//!     Title: Admisión 2026
//!     Output: index.html
//! /admin (link only)
//! ```
//!
//! ## Images
//!
//! ```text
//! Images (2 ids)
//! hero → https://images.weserv.nl/?url=drive.google.com%2Fuc%3F...
//!     Id: ABC123
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::generate::GenerateResult;
use crate::resolve::resolve_image_url;
use crate::router::{ADMIN_PATH, Route};
use crate::types::ImageConfig;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, one)
    } else {
        format!("{} {}", n, many)
    }
}

/// Format the result of `build`.
pub fn format_build_output(result: &GenerateResult) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (i, page) in result.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {} ({})",
            format_index(i + 1),
            page.route.nav_label(),
            page.file,
            plural(page.image_keys, "image id", "image ids")
        ));
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    lines.push(format!("{}{}", indent(1), result.assets.stylesheet));
    lines.push(format!("{}{}", indent(1), result.assets.script));

    lines.push(String::new());
    lines.push(format!("Generated {}", plural(result.pages.len(), "page", "pages")));
    lines
}

pub fn print_build_output(result: &GenerateResult) {
    for line in format_build_output(result) {
        println!("{}", line);
    }
}

/// Format the route table.
pub fn format_routes() -> Vec<String> {
    let mut lines = Vec::new();
    for (i, route) in Route::ALL.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            route.path(),
            route.nav_label()
        ));
        lines.push(format!("{}Title: {}", indent(1), route.title()));
        lines.push(format!("{}Output: {}", indent(1), route.output_file()));
    }
    lines.push(format!("{} (link only)", ADMIN_PATH));
    lines
}

pub fn print_routes() {
    for line in format_routes() {
        println!("{}", line);
    }
}

/// Format the fetched image configuration with each resolved URL.
pub fn format_images(config: &ImageConfig) -> Vec<String> {
    if config.is_empty() {
        return vec!["No images configured".to_string()];
    }
    let mut lines = vec![format!("Images ({})", plural(config.len(), "id", "ids"))];
    for (key, id) in config.iter() {
        let url = resolve_image_url(id);
        if url.is_empty() {
            lines.push(format!("{} \u{2192} (no image)", key));
        } else {
            lines.push(format!("{} \u{2192} {}", key, url));
            lines.push(format!("{}Id: {}", indent(1), id));
        }
    }
    lines
}

pub fn print_images(config: &ImageConfig) {
    for line in format_images(config) {
        println!("{}", line);
    }
}
