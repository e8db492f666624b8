//! Error type for browse operations.

use std::path::PathBuf;

/// Error returned by fetch, cache, and navigation operations.
///
/// The first three variants are what the user sees as "Incorrect URL";
/// see [`BrowseError::is_incorrect_url`].
#[derive(Debug, thiserror::Error)]
pub enum BrowseError {
    /// Input is neither a URL nor the name of a visited page, or the URL
    /// does not yield a usable page name.
    #[error("incorrect URL: {0}")]
    IncorrectUrl(String),

    /// Server answered with an error status (>= 400).
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },

    /// Curl reported a transport failure (DNS, connect, timeout, TLS...).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Reading or writing a cached page failed.
    #[error("cache I/O on {}: {source}", .path.display())]
    Cache {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BrowseError {
    /// True for the kinds reported to the user as "Incorrect URL".
    pub fn is_incorrect_url(&self) -> bool {
        matches!(
            self,
            BrowseError::IncorrectUrl(_) | BrowseError::Http { .. } | BrowseError::Transport { .. }
        )
    }

    pub(crate) fn cache(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BrowseError::Cache {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = BrowseError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incorrect_url_kinds() {
        assert!(BrowseError::IncorrectUrl("foo".into()).is_incorrect_url());
        assert!(BrowseError::Http {
            url: "https://example.com".into(),
            status: 404
        }
        .is_incorrect_url());
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!BrowseError::cache("/tmp/x", io).is_incorrect_url());
    }

    #[test]
    fn http_display_names_status() {
        let e = BrowseError::Http {
            url: "https://example.com/".into(),
            status: 503,
        };
        assert_eq!(e.to_string(), "GET https://example.com/ returned HTTP 503");
    }
}
