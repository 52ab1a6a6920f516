//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the `--source` directory and is optional: stock defaults build the real
//! site as-is.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "La Católica GEM"
//! lang = "es"
//!
//! [store]
//! endpoint = "https://firestore.googleapis.com/v1"
//! project_id = "colegio-catolica"
//! # api_key = "..."          # Web API key, sent as ?key=
//!
//! [slideshow]
//! interval_ms = 5000         # Rotation period of image slideshows
//!
//! [colors]
//! primary = "#063B88"
//! deep = "#02153A"
//! accent = "#F6C200"
//! background = "#E8F1FF"
//! surface = "#ffffff"
//! text = "#1f2937"
//!
//! [processing]
//! max_processes = 4          # Pages rendered in parallel (omit for auto)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [slideshow]
//! interval_ms = 8000
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Upper bound for `slideshow.interval_ms`: one day.
pub const MAX_SLIDESHOW_INTERVAL_MS: u64 = 24 * 60 * 60 * 1000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults matching the production site. Unknown keys are
/// rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document-level settings (title suffix, language).
    pub site: SiteInfo,
    /// Where the image document is read from.
    pub store: StoreConfig,
    /// Slideshow timing.
    pub slideshow: SlideshowConfig,
    /// Brand palette, emitted as CSS custom properties.
    pub colors: ColorConfig,
    /// Parallel rendering settings.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slideshow.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "slideshow.interval_ms must be greater than 0".into(),
            ));
        }
        if self.slideshow.interval_ms > MAX_SLIDESHOW_INTERVAL_MS {
            return Err(ConfigError::Validation(format!(
                "slideshow.interval_ms must be at most {MAX_SLIDESHOW_INTERVAL_MS} (one day)"
            )));
        }
        if self.store.project_id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "store.project_id must not be empty".into(),
            ));
        }
        if !(self.store.endpoint.starts_with("https://")
            || self.store.endpoint.starts_with("http://"))
        {
            return Err(ConfigError::Validation(
                "store.endpoint must be an http(s) URL".into(),
            ));
        }
        if self.site.lang.trim().is_empty() {
            return Err(ConfigError::Validation("site.lang must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Appended to every page title: `"<page> | <title>"`.
    pub title: String,
    /// `<html lang>` value.
    pub lang: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "La Católica GEM".to_string(),
            lang: "es".to_string(),
        }
    }
}

/// Firestore connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// REST API base URL, without trailing slash.
    pub endpoint: String,
    /// Firestore project id.
    pub project_id: String,
    /// Optional web API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://firestore.googleapis.com/v1".to_string(),
            project_id: "colegio-catolica".to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlideshowConfig {
    /// Milliseconds between slides.
    pub interval_ms: u64,
}

impl SlideshowConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self { interval_ms: 5000 }
    }
}

/// Brand palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Buttons, headings, active nav pill.
    pub primary: String,
    /// Dark navy used behind hero overlays and in the footer.
    pub deep: String,
    /// Highlight yellow.
    pub accent: String,
    /// Page background.
    pub background: String,
    /// Cards and header.
    pub surface: String,
    /// Body text.
    pub text: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#063B88".to_string(),
            deep: "#02153A".to_string(),
            accent: "#F6C200".to_string(),
            background: "#E8F1FF".to_string(),
            surface: "#ffffff".to_string(),
            text: "#1f2937".to_string(),
        }
    }
}

/// Parallel rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of pages rendered at once.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# La Católica GEM site configuration
# ==================================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Document
# ---------------------------------------------------------------------------
[site]
# Appended to every page title.
title = "La Católica GEM"
# <html lang> attribute.
lang = "es"

# ---------------------------------------------------------------------------
# Image document store (Firestore REST API)
# ---------------------------------------------------------------------------
[store]
endpoint = "https://firestore.googleapis.com/v1"
project_id = "colegio-catolica"
# Web API key, sent as ?key=. Not needed when the document is publicly readable.
# api_key = ""

# ---------------------------------------------------------------------------
# Slideshows (Secundaria gallery, Ciclo Vacacional band)
# ---------------------------------------------------------------------------
[slideshow]
# Milliseconds between slides.
interval_ms = 5000

# ---------------------------------------------------------------------------
# Brand colors
# ---------------------------------------------------------------------------
[colors]
primary = "#063B88"
deep = "#02153A"
accent = "#F6C200"
background = "#E8F1FF"
surface = "#ffffff"
text = "#1f2937"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum pages rendered in parallel.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-deep: {deep};
    --color-accent: {accent};
    --color-bg: {background};
    --color-surface: {surface};
    --color-text: {text};
}}"#,
        primary = colors.primary,
        deep = colors.deep,
        accent = colors.accent,
        background = colors.background,
        surface = colors.surface,
        text = colors.text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_production_site() {
        let config = SiteConfig::default();
        assert_eq!(config.store.project_id, "colegio-catolica");
        assert_eq!(config.slideshow.interval(), Duration::from_secs(5));
        assert_eq!(config.colors.accent, "#F6C200");
        assert_eq!(config.site.lang, "es");
        assert!(config.store.api_key.is_none());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors]
accent = "#ffcc00"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.colors.accent, "#ffcc00");
        assert_eq!(config.colors.primary, "#063B88");
        assert_eq!(config.slideshow.interval_ms, 5000);
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.background = "#fafafa".to_string();
        let css = generate_color_css(&colors);
        assert!(css.contains("--color-bg: #fafafa"));
        assert!(css.contains("--color-accent: #F6C200"));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.store.project_id, "colegio-catolica");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[store]
project_id = "staging"
api_key = "k"

[slideshow]
interval_ms = 8000
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.store.project_id, "staging");
        assert_eq!(config.store.api_key.as_deref(), Some("k"));
        assert_eq!(config.slideshow.interval_ms, 8000);
        // Unspecified values keep defaults
        assert_eq!(config.store.endpoint, "https://firestore.googleapis.com/v1");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[slideshow]\nintervl_ms = 1\n").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[gallery]\nx = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[slideshow]\ninterval_ms = 0\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_huge_interval() {
        let mut config = SiteConfig::default();
        config.slideshow.interval_ms = MAX_SLIDESHOW_INTERVAL_MS;
        assert!(config.validate().is_ok());
        config.slideshow.interval_ms = u64::MAX;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_bad_endpoint() {
        let mut config = SiteConfig::default();
        config.store.endpoint = "firestore.googleapis.com".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_project() {
        let mut config = SiteConfig::default();
        config.store.project_id = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    // =========================================================================
    // Merge tests
    // =========================================================================

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str("[colors]\nprimary = \"#1\"\naccent = \"#2\"\n").unwrap();
        let overlay: toml::Value = toml::from_str("[colors]\naccent = \"#3\"\n").unwrap();
        let merged = merge_toml(base, overlay);
        let colors = merged.get("colors").unwrap();
        assert_eq!(colors.get("primary").unwrap().as_str(), Some("#1"));
        assert_eq!(colors.get("accent").unwrap().as_str(), Some("#3"));
    }

    #[test]
    fn merge_toml_scalar_override() {
        let merged = merge_toml(toml::Value::Integer(1), toml::Value::Integer(2));
        assert_eq!(merged.as_integer(), Some(2));
    }

    // =========================================================================
    // Stock config
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.store.project_id, defaults.store.project_id);
        assert_eq!(config.slideshow.interval_ms, defaults.slideshow.interval_ms);
        assert_eq!(config.colors.deep, defaults.colors.deep);
        assert_eq!(config.site.title, defaults.site.title);
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let value = stock_defaults_value().unwrap();
        let table = value.as_table().unwrap();
        for section in ["site", "store", "slideshow", "colors", "processing"] {
            assert!(table.contains_key(section), "missing [{section}]");
        }
    }

    // =========================================================================
    // Processing
    // =========================================================================

    #[test]
    fn effective_threads_auto() {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(effective_threads(&ProcessingConfig::default()), cores);
    }

    #[test]
    fn effective_threads_clamped_to_cores() {
        let config = ProcessingConfig {
            max_processes: Some(100_000),
        };
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(effective_threads(&config), cores);
    }

    #[test]
    fn effective_threads_never_zero() {
        let config = ProcessingConfig {
            max_processes: Some(0),
        };
        assert_eq!(effective_threads(&config), 1);
    }
}
