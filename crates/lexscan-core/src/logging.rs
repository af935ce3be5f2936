//! Logging init: file under XDG state dir, or graceful fallback to stderr.

use anyhow::Result;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "lexscan.log";
const FILE_FILTER: &str = "info,lexscan=debug,lexscan_core=debug";
/// Stderr shares the terminal with prompts, so only warnings by default.
const STDERR_FILTER: &str = "warn";

/// Destination for log lines: the log file, or stderr when there is none.
#[derive(Debug)]
pub struct LogSink {
    file: Option<File>,
}

impl LogSink {
    /// Opens (appending) the log file at `path`, creating parent directories.
    pub fn open(path: &Path) -> io::Result<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let file = fs::OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file: Some(file) })
    }

    pub fn stderr() -> Self {
        Self { file: None }
    }

    pub fn is_file(&self) -> bool {
        self.file.is_some()
    }
}

/// Per-event writer handed out by [`LogSink`].
pub enum SinkWriter {
    File(File),
    Stderr,
}

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            SinkWriter::File(f) => f.write(buf),
            SinkWriter::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            SinkWriter::File(f) => f.flush(),
            SinkWriter::Stderr => io::stderr().lock().flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = SinkWriter;

    // A handle that cannot be cloned degrades to stderr for that event.
    fn make_writer(&'a self) -> Self::Writer {
        self.file
            .as_ref()
            .and_then(|f| f.try_clone().ok())
            .map(SinkWriter::File)
            .unwrap_or(SinkWriter::Stderr)
    }
}

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn install(sink: LogSink, filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(sink)
        .with_ansi(false)
        .init();
}

/// Location of the log file: `~/.local/state/lexscan/lexscan.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("lexscan")?;
    Ok(xdg_dirs.get_state_home().join(LOG_FILE_NAME))
}

/// Initialize structured logging to the file from [`log_file_path`] and return its path.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    install(LogSink::open(&path)?, filter_or(FILE_FILTER));
    tracing::info!("lexscan logging initialized at {}", path.display());
    Ok(path)
}

/// Initialize logging to stderr only. Use when init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    install(LogSink::stderr(), filter_or(STDERR_FILTER));
}
