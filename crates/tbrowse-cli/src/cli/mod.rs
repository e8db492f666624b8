//! CLI for the tbrowse text-mode browser.

mod repl;

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tbrowse_core::config::{self, BrowserConfig};
use tbrowse_core::Browser;

/// Top-level CLI: one cache directory, then an interactive prompt.
#[derive(Debug, Parser)]
#[command(name = "tbrowse")]
#[command(
    about = "tbrowse: minimal text-mode web browser",
    long_about = "Type a URL to fetch it, the name of a visited page to reopen it from the cache, \
                  `back` to go to the previous page, or `exit` to quit."
)]
pub struct Cli {
    /// Directory holding cached pages (created if missing).
    pub directory: PathBuf,

    /// Do not highlight links.
    #[arg(long)]
    pub no_color: bool,

    /// Config file to use instead of ~/.config/tbrowse/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    fn load_config(&self) -> Result<BrowserConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_or_init_at(path)?,
            None => config::load_or_init()?,
        };
        if self.no_color {
            cfg.highlight_links = false;
        }
        tracing::debug!("loaded config: {:?}", cfg);
        Ok(cfg)
    }

    fn run(self) -> Result<()> {
        let cfg = self.load_config()?;
        let mut browser = Browser::open(&self.directory, &cfg).with_context(|| {
            format!("cannot use cache directory {}", self.directory.display())
        })?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        repl::run(&mut browser, stdin.lock(), &mut stdout.lock())?;
        tracing::info!(
            pages = browser.session().visited_count(),
            "session ended"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests;
