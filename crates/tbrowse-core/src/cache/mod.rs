//! Flat-file page cache.
//!
//! One UTF-8 text file per page name, directly inside the cache directory.
//! Unbounded; nothing is ever evicted.

mod write;

pub use write::{temp_path, TEMP_SUFFIX};

use crate::error::{BrowseError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Rendered pages on disk, keyed by page name.
#[derive(Debug, Clone)]
pub struct PageCache {
    dir: PathBuf,
}

impl PageCache {
    /// Opens the cache at `dir`, creating the directory (and parents) if missing.
    /// Fails if something other than a directory is already at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| BrowseError::cache(&dir, e))?;
            tracing::info!("created cache directory {}", dir.display());
        } else if !dir.is_dir() {
            let e = io::Error::new(io::ErrorKind::AlreadyExists, "not a directory");
            return Err(BrowseError::cache(&dir, e));
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds (or would hold) page `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }

    /// Stores `content` for `name`, followed by a newline. Replaces any previous copy.
    pub fn save(&self, name: &str, content: &str) -> Result<()> {
        let path = self.path_for(name);
        let mut data = String::with_capacity(content.len() + 1);
        data.push_str(content);
        data.push('\n');
        write::write_atomic(&path, data.as_bytes()).map_err(|e| BrowseError::cache(&path, e))?;
        tracing::debug!(page = name, bytes = data.len(), "cached page");
        Ok(())
    }

    /// Reads page `name` back, without the newline [`save`](Self::save) appended.
    pub fn load(&self, name: &str) -> Result<String> {
        let path = self.path_for(name);
        let mut content = fs::read_to_string(&path).map_err(|e| BrowseError::cache(&path, e))?;
        if content.ends_with('\n') {
            content.pop();
        }
        tracing::debug!(page = name, bytes = content.len(), "loaded page from cache");
        Ok(content)
    }

    /// Page names currently on disk, sorted. Temp files and subdirectories are skipped.
    pub fn names(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| BrowseError::cache(&self.dir, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| BrowseError::cache(&self.dir, e))?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if name.ends_with(TEMP_SUFFIX) || name.contains('.') {
                continue;
            }
            names.push(name);
        }
        names.sort();
        Ok(names)
    }
}
