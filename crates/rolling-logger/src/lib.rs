//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes to `<dir>/<app>.log` and,
//! optionally, to stderr. When the current file would grow past the size
//! limit it is shifted to `<app>.1.log`, older files move up by one and the
//! oldest is dropped, so at most `max_files` files exist at any time.
//! Records emitted through the `log` facade are bridged in as well.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_MAX_FILE_BYTES: u64 = 1024 * 1024;
const DEFAULT_MAX_FILES: usize = 5;

/// Logger errors
#[derive(Debug)]
pub enum LoggerError {
    Io(io::Error),
    Filter(String),
    AlreadyInitialized(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "Log file error: {}", e),
            LoggerError::Filter(msg) => write!(f, "Invalid log filter: {}", msg),
            LoggerError::AlreadyInitialized(msg) => write!(f, "Logger already initialized: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<io::Error> for LoggerError {
    fn from(e: io::Error) -> Self {
        LoggerError::Io(e)
    }
}

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub dir: PathBuf,
    pub app_name: String,
    /// Rotate once the current file would exceed this size
    pub max_file_bytes: u64,
    /// Current file plus rotated ones
    pub max_files: usize,
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Also write compact lines to stderr
    pub console: bool,
}

impl LoggerConfig {
    pub fn new(dir: impl Into<PathBuf>, app_name: &str) -> Self {
        Self {
            dir: dir.into(),
            app_name: app_name.to_string(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            max_files: DEFAULT_MAX_FILES,
            level: "info".to_string(),
            console: true,
        }
    }

    pub fn current_file(&self) -> PathBuf {
        log_file_path(&self.dir, &self.app_name)
    }
}

/// Path of the live log file
pub fn log_file_path(dir: &Path, app_name: &str) -> PathBuf {
    dir.join(format!("{}.log", app_name))
}

fn rotated_path(dir: &Path, app_name: &str, n: usize) -> PathBuf {
    dir.join(format!("{}.{}.log", app_name, n))
}

/// Initialize with default limits, info level and console output
pub fn init_logger(dir: impl Into<PathBuf>, app_name: &str) -> Result<PathBuf, LoggerError> {
    init_with(LoggerConfig::new(dir, app_name))
}

/// Install the global subscriber; returns the live log file path
pub fn init_with(config: LoggerConfig) -> Result<PathBuf, LoggerError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| LoggerError::Filter(e.to_string()))?,
    };

    let file = RollingFile::open(&config)?;
    let path = file.path().to_path_buf();

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(LocalTime);

    let console_layer = config.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .compact()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    tracing::debug!("Logging to {}", path.display());
    Ok(path)
}

/// Last `lines` lines of the live log file
pub fn read_tail(dir: &Path, app_name: &str, lines: usize) -> io::Result<Vec<String>> {
    let path = log_file_path(dir, app_name);
    let file = match File::open(&path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };
    let all: Vec<String> = BufReader::new(file).lines().collect::<io::Result<_>>()?;
    let skip = all.len().saturating_sub(lines);
    Ok(all.into_iter().skip(skip).collect())
}

/// Local wall-clock timestamps for file lines
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Append-only file that rotates itself by size
pub struct RollingFile {
    dir: PathBuf,
    app_name: String,
    path: PathBuf,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    pub fn open(config: &LoggerConfig) -> io::Result<Self> {
        fs::create_dir_all(&config.dir)?;
        let path = config.current_file();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            dir: config.dir.clone(),
            app_name: config.app_name.clone(),
            path,
            max_bytes: config.max_file_bytes.max(1),
            max_files: config.max_files.max(1),
            file,
            written,
        })
    }

    /// Live file; rotated files sit next to it
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        let keep = self.max_files - 1;
        if keep == 0 {
            // Single-file mode: start over.
            self.file = File::create(&self.path)?;
            self.written = 0;
            return Ok(());
        }
        let oldest = rotated_path(&self.dir, &self.app_name, keep);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..keep).rev() {
            let from = rotated_path(&self.dir, &self.app_name, n);
            if from.exists() {
                fs::rename(&from, rotated_path(&self.dir, &self.app_name, n + 1))?;
            }
        }
        fs::rename(&self.path, rotated_path(&self.dir, &self.app_name, 1))?;
        self.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
