//! The browser: ties fetch, render, cache, and session history together.

use std::path::PathBuf;

use crate::cache::PageCache;
use crate::config::BrowserConfig;
use crate::error::{BrowseError, Result};
use crate::fetch::{CurlFetcher, FetchOptions, Fetcher};
use crate::history::Session;
use crate::render::{self, RenderOptions};
use crate::url_model;

/// Text-mode browser over a page cache directory.
pub struct Browser<F = CurlFetcher> {
    cache: PageCache,
    session: Session,
    fetcher: F,
    render: RenderOptions,
}

impl Browser<CurlFetcher> {
    /// Opens a browser over `cache_dir` using libcurl and the given config.
    pub fn open(cache_dir: impl Into<PathBuf>, cfg: &BrowserConfig) -> Result<Self> {
        let fetcher = CurlFetcher::new(FetchOptions::from(cfg));
        Self::with_fetcher(cache_dir, cfg, fetcher)
    }
}

impl<F: Fetcher> Browser<F> {
    /// Opens a browser with a caller-supplied fetcher.
    pub fn with_fetcher(
        cache_dir: impl Into<PathBuf>,
        cfg: &BrowserConfig,
        fetcher: F,
    ) -> Result<Self> {
        let cache = PageCache::open(cache_dir)?;
        let session = if cfg.restore_cache_on_start {
            let names = cache.names()?;
            tracing::info!(pages = names.len(), "restored cached pages as visited");
            Session::with_visited(names)
        } else {
            Session::new()
        };
        Ok(Self {
            cache,
            session,
            fetcher,
            render: RenderOptions {
                highlight_links: cfg.highlight_links,
            },
        })
    }

    /// Shows `input`: fetches it when it looks like a URL, otherwise loads the
    /// visited page of that name from disk. Returns the page text.
    ///
    /// On error the session is left as it was.
    pub fn browse(&mut self, input: &str) -> Result<String> {
        if url_model::is_valid_url(input) {
            let url = url_model::normalize_url(input);
            let name = url_model::page_name_from_url(&url)?;
            let page = self.fetcher.fetch(&url)?;
            let text = render::html_to_text(&page.body, &self.render);
            self.cache.save(&name, &text)?;
            self.session.visit(&name);
            tracing::info!(url = %url, page = %name, "browsed");
            Ok(text)
        } else if self.session.has_visited(input) {
            let text = self.cache.load(input)?;
            self.session.visit(input);
            tracing::info!(page = input, "opened cached page");
            Ok(text)
        } else {
            Err(BrowseError::IncorrectUrl(input.to_string()))
        }
    }

    /// Goes back one page. `Ok(None)` when history is empty.
    ///
    /// The page is loaded before the history moves, so a failed load leaves
    /// the session as it was.
    pub fn back(&mut self) -> Result<Option<String>> {
        let Some(name) = self.session.previous().map(str::to_string) else {
            tracing::debug!("back with empty history");
            return Ok(None);
        };
        let text = self.cache.load(&name)?;
        self.session.back();
        tracing::info!(page = %name, "back");
        Ok(Some(text))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
