use std::ffi::OsStr;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{BlogError, Result};

const LOG_TARGET: &str = "blogql";

/// Directive used when `RUST_LOG` is unset. Verbose mode turns on the
/// per-resolver `debug!` traces.
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("{}={}", LOG_TARGET, level)
}

/// `RUST_LOG` when it parses, otherwise [`default_directive`].
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Daily-rotated appender writing next to `log_path`, creating its directory.
pub fn file_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let prefix = log_path
        .file_name()
        .unwrap_or_else(|| OsStr::new("blogql.log"))
        .to_string_lossy()
        .into_owned();

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .build(dir)
        .map_err(|e| BlogError::Config(format!("Failed to open log file: {}", e)))
}

/// Install the global subscriber: compact stderr output, plus JSON lines in
/// `log_file` when given.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = match log_file {
        Some(path) => Some(
            fmt::layer()
                .with_writer(file_appender(path)?)
                .with_ansi(false)
                .json(),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| BlogError::Config(format!("Failed to initialize logging: {}", e)))
}
