//! Image identifier → public URL.
//!
//! Image identifiers stored in the document store are Google Drive file ids.
//! Drive does not serve those files with image-friendly headers, so every URL
//! goes through the weserv.nl image proxy:
//!
//! ```text
//! ABC123
//!   → https://drive.google.com/uc?export=view&id=ABC123
//!   → https://images.weserv.nl/?url=drive.google.com%2Fuc%3Fexport%3Dview%26id%3DABC123
//! ```
//!
//! Everything here is pure. Nothing is cached: the URL is rebuilt on every
//! lookup.

/// Drive file-view endpoint. The identifier is appended verbatim.
pub const DRIVE_VIEW_PREFIX: &str = "https://drive.google.com/uc?export=view&id=";

/// Image proxy endpoint. The encoded source URL is appended.
pub const PROXY_PREFIX: &str = "https://images.weserv.nl/?url=";

/// Build the Drive file-view URL for an identifier.
pub fn drive_source_url(id: &str) -> String {
    format!("{DRIVE_VIEW_PREFIX}{id}")
}

/// Resolve an identifier to a displayable URL, or `""` when there is none.
///
/// An empty identifier means "no image configured for this slot" and yields
/// an empty string, which sections render as a placeholder.
pub fn resolve_image_url(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }
    let source = drive_source_url(id);
    let stripped = source.strip_prefix("https://").unwrap_or(&source);
    format!("{PROXY_PREFIX}{}", encode_uri_component(stripped))
}

/// Percent-encode with the same unreserved set as JavaScript's
/// `encodeURIComponent`.
///
/// `urlencoding` only leaves `-_.~` and alphanumerics alone; the browser
/// function also keeps `!'()*`. A literal `%` always becomes `%25`, so the
/// escapes undone here can only come from those five characters.
pub fn encode_uri_component(input: &str) -> String {
    urlencoding::encode(input)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}
