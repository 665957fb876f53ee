//! Log-file sink configuration.
//!
//! Console output and the log file are filtered independently: the console
//! threshold lives on the [`crate::ui::UserOutput`] sink, while the file
//! threshold is adjusted through a [`LogLevelHandle`] so `--log-level=` can
//! take effect while arguments are still being parsed.

use std::path::PathBuf;

use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

use crate::ui::Verbosity;

/// Handle for adjusting the log file's level filter after initialization.
///
/// A disabled handle (no subscriber installed, or file logging unavailable)
/// turns level changes into no-ops, which keeps the parser testable without
/// global subscriber state.
pub struct LogLevelHandle {
    handle: Option<reload::Handle<EnvFilter, Registry>>,
}

impl LogLevelHandle {
    /// Create a handle whose level changes are ignored.
    pub fn disabled() -> Self {
        Self { handle: None }
    }

    /// Replace the log file's level filter.
    pub fn set_level(&self, level: Verbosity) {
        let Some(handle) = &self.handle else {
            return;
        };

        let directive = match level {
            Verbosity::Debug => "piton=debug",
            Verbosity::Info => "piton=info",
            Verbosity::Warning => "piton=warn",
            Verbosity::Error => "piton=error",
        };
        if let Err(err) = handle.reload(EnvFilter::new(directive)) {
            eprintln!("Warning: could not change log level: {}", err);
        }
    }
}

/// Initialize logging to a rolling file in the default log directory.
///
/// Log level is controlled by:
/// 1. `--log-level=<level>` via the returned handle
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Failure to create the log directory degrades to disabled file logging
/// rather than aborting the run.
pub fn init() -> LogLevelHandle {
    let log_dir = default_log_dir();
    if let Err(err) = std::fs::create_dir_all(&log_dir) {
        eprintln!(
            "Warning: could not create log directory {}: {}",
            log_dir.display(),
            err
        );
        return LogLevelHandle::disabled();
    }

    let appender = tracing_appender::rolling::daily(&log_dir, "piton.log");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("piton=info"));
    let (filter, handle) = reload::Layer::new(filter);

    let file_layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(file_layer).init();

    LogLevelHandle { handle: Some(handle) }
}

/// Returns the directory for log files.
///
/// Uses the XDG state directory on Linux (`~/.local/state/piton`), falls
/// back to the config directory on other platforms, and to the temp
/// directory as a last resort.
pub fn default_log_dir() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        return state_dir.join("piton");
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("piton");
    }

    std::env::temp_dir().join("piton")
}
