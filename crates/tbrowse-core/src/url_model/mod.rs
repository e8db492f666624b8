//! URL modeling and page-name derivation.
//!
//! Decides whether user input is a URL, normalizes it to an absolute
//! `https://` URL, and derives the cache key ("page name") from its host.

mod page_name;
mod sanitize;

pub use page_name::page_name_from_url;
pub use sanitize::sanitize_page_name;

/// True if `input` should be fetched as a URL rather than looked up as a page name.
///
/// Anything containing a dot counts: `docs.python.org`, `https://a.b/c`.
/// Page names never contain dots because they are built by joining host labels with `-`.
pub fn is_valid_url(input: &str) -> bool {
    input.contains('.')
}

/// Returns `input` as an absolute URL.
///
/// Inputs that already carry an `http://` or `https://` scheme are kept as-is;
/// anything else is assumed to be a bare host (and optional path) served over HTTPS.
pub fn normalize_url(input: &str) -> String {
    let lower = input.get(..8).unwrap_or(input).to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}
