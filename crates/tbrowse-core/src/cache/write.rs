//! Temp-file write and atomic rename into the cache.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `bloomberg` → `bloomberg.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Writes `data` to `final_path.part`, syncs it, then renames it over `final_path`.
/// Readers never observe a half-written page.
pub(crate) fn write_atomic(final_path: &Path, data: &[u8]) -> io::Result<()> {
    let tmp = temp_path(final_path);
    let result = (|| -> io::Result<()> {
        let mut file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp)?;
        file.write_all(data)?;
        file.sync_all()?;
        drop(file);
        std::fs::rename(&tmp, final_path)
    })();
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_part() {
        let p = temp_path(Path::new("bloomberg"));
        assert_eq!(p.to_string_lossy(), "bloomberg.part");
        let p2 = temp_path(Path::new("/tmp/cache/docs-python"));
        assert_eq!(p2.to_string_lossy(), "/tmp/cache/docs-python.part");
    }

    #[test]
    fn write_atomic_replaces_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("page");
        write_atomic(&final_path, b"first").unwrap();
        write_atomic(&final_path, b"second").unwrap();
        assert_eq!(std::fs::read(&final_path).unwrap(), b"second");
        assert!(!temp_path(&final_path).exists());
    }

    #[test]
    fn write_atomic_into_missing_dir_fails_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("missing").join("page");
        assert!(write_atomic(&final_path, b"x").is_err());
        assert!(!final_path.exists());
    }
}
