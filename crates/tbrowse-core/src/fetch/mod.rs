//! HTTP page fetching.
//!
//! Uses the curl crate (libcurl) for a blocking GET that follows redirects
//! and collects the whole body in memory.

mod parse;

use crate::config::BrowserConfig;
use crate::error::{BrowseError, Result};
use std::str;
use std::time::Duration;

/// Metadata taken from the final response's headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMeta {
    /// Raw `Content-Type` value, if present.
    pub content_type: Option<String>,
    /// `charset` parameter of `Content-Type`, lowercased.
    pub charset: Option<String>,
    /// `Content-Length`, if present.
    pub content_length: Option<u64>,
}

/// A successfully fetched page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects.
    pub final_url: String,
    /// Final HTTP status (always < 400).
    pub status: u32,
    pub meta: ResponseMeta,
    /// Response body decoded as UTF-8 (invalid sequences replaced).
    pub body: String,
}

/// Source of page bodies. `Browser` depends only on this trait.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

/// Request options for [`CurlFetcher`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub max_redirections: u32,
}

impl From<&BrowserConfig> for FetchOptions {
    fn from(cfg: &BrowserConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            max_redirections: cfg.max_redirections,
        }
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from(&BrowserConfig::default())
    }
}

/// libcurl-backed fetcher. One Easy handle per request; runs on the calling thread.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    opts: FetchOptions,
}

impl CurlFetcher {
    pub fn new(opts: FetchOptions) -> Self {
        Self { opts }
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let transport = |source: curl::Error| BrowseError::Transport {
            url: url.to_string(),
            source,
        };

        let mut headers: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(transport)?;
        easy.get(true).map_err(transport)?;
        easy.useragent(&self.opts.user_agent).map_err(transport)?;
        easy.follow_location(true).map_err(transport)?;
        easy.max_redirections(self.opts.max_redirections)
            .map_err(transport)?;
        // Empty string: accept every encoding libcurl can decode.
        easy.accept_encoding("").map_err(transport)?;
        easy.connect_timeout(self.opts.connect_timeout)
            .map_err(transport)?;
        easy.timeout(self.opts.timeout).map_err(transport)?;

        tracing::debug!(url, "GET");
        {
            let mut transfer = easy.transfer();
            transfer
                .header_function(|data| {
                    if let Ok(s) = str::from_utf8(data) {
                        headers.push(s.trim_end().to_string());
                    }
                    true
                })
                .map_err(transport)?;
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(transport)?;
            transfer.perform().map_err(transport)?;
        }

        let status = easy.response_code().map_err(transport)?;
        let final_url = easy
            .effective_url()
            .map_err(transport)?
            .unwrap_or(url)
            .to_string();

        if status >= 400 {
            tracing::warn!(url, status, "page request rejected");
            return Err(BrowseError::Http {
                url: url.to_string(),
                status,
            });
        }

        let meta = parse::parse_headers(&headers);
        tracing::debug!(
            url,
            final_url = %final_url,
            status,
            bytes = body.len(),
            content_type = meta.content_type.as_deref().unwrap_or("-"),
            "GET complete"
        );
        if let Some(charset) = meta.charset.as_deref() {
            if charset != "utf-8" && charset != "us-ascii" {
                tracing::debug!(url, charset, "non-UTF-8 charset decoded lossily");
            }
        }

        Ok(FetchedPage {
            final_url,
            status,
            meta,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}
