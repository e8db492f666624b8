use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User-Agent sent with every page request unless overridden.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:83.0) Gecko/20100101 Firefox/83.0";

/// Global configuration loaded from `~/.config/tbrowse/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// `User-Agent` header for page requests.
    pub user_agent: String,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum number of redirects followed per request.
    pub max_redirections: u32,
    /// Wrap link text in ANSI blue when rendering.
    pub highlight_links: bool,
    /// Treat pages already in the cache directory as visited at start-up.
    pub restore_cache_on_start: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
            max_redirections: 10,
            highlight_links: true,
            restore_cache_on_start: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tbrowse")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
pub fn load_or_init() -> Result<BrowserConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<BrowserConfig> {
    if !path.exists() {
        let default_cfg = BrowserConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("failed to write default config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(path)
}

/// Load configuration from an existing file. Missing fields take their defaults.
pub fn load_from_path(path: &Path) -> Result<BrowserConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: BrowserConfig =
        toml::from_str(&data).with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}
