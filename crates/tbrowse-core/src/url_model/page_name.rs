//! Page-name (cache key) extraction from a URL host.

use super::sanitize::sanitize_page_name;
use crate::error::{BrowseError, Result};

/// Derives the cache key for `url` from its host.
///
/// The host is split on `.`, the last label (the TLD) is dropped, and the
/// remaining labels are joined with `-`: `docs.python.org` → `docs-python`.
/// Fails when the URL cannot be parsed, has no host, or the name comes out empty
/// (e.g. a single-label host such as `localhost`).
pub fn page_name_from_url(url: &str) -> Result<String> {
    let parsed =
        url::Url::parse(url).map_err(|e| BrowseError::IncorrectUrl(format!("{url}: {e}")))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| BrowseError::IncorrectUrl(format!("{url}: missing host")))?;

    let labels: Vec<&str> = host.split('.').collect();
    let keep = labels.len().saturating_sub(1);
    let name = sanitize_page_name(&labels[..keep].join("-"));
    if name.is_empty() {
        return Err(BrowseError::IncorrectUrl(format!(
            "{url}: host {host} yields no page name"
        )));
    }
    Ok(name)
}
