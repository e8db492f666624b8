//! Logging init: file under XDG state dir, or graceful fallback to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tbrowse=debug";

/// Writer that is either the log file or stderr (used when the file clone fails).
enum FileOrStderr {
    File(std::fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize structured logging to `~/.local/state/tbrowse/tbrowse.log`.
///
/// Page text goes to stdout, so logs never share the terminal unless the
/// caller falls back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tbrowse")?;
    let log_dir = xdg_dirs.get_state_home();

    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join("tbrowse.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    struct FileMakeWriter(std::fs::File);

    impl<'a> MakeWriter<'a> for FileMakeWriter {
        type Writer = FileOrStderr;

        fn make_writer(&'a self) -> Self::Writer {
            self.0
                .try_clone()
                .map(FileOrStderr::File)
                .unwrap_or(FileOrStderr::Stderr)
        }
    }

    let writer: BoxMakeWriter = BoxMakeWriter::new(FileMakeWriter(file));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!("tbrowse logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only. Use when [`init_logging`] fails so the CLI keeps running.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
