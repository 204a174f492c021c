//! # Logger
//!
//! A centralized logging utility for the project.
//! It provides a unified way to configure console and file logging with
//! rotation, non-blocking I/O, and environment-based filtering.
//!
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"folio=debug,tokio=info"`), in addition to `RUST_LOG`.
//! * File logging is optional; when enabled, the returned [`Logger`] holds a
//!   worker guard that must stay alive for buffered lines to be flushed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use folio_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for configuring and initializing the global tracing subscriber.
#[allow(private_bounds)]
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name of the logger; used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { name: WithName(name.into()), config: self.config }
    }
}

#[allow(private_bounds)]
impl<N: Sealed> LoggerBuilder<N> {
    /// Enables or disables the console layer.
    #[must_use = "The builder must be configured before it can initialize the logger"]
    pub const fn console(mut self, enable: bool) -> Self {
        self.config.console = enable;
        self
    }

    /// Sets the maximum log level recorded by default.
    #[must_use = "The builder must be configured before it can initialize the logger"]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Enables rolling file logging inside `dir`.
    #[must_use = "The builder must be configured before it can initialize the logger"]
    pub fn file(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.path = Some(dir.into());
        self
    }

    /// Sets the file rotation cadence.
    #[must_use = "The builder must be configured before it can initialize the logger"]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Configures the maximum number of rotated files to keep.
    #[must_use = "The builder must be configured before it can initialize the logger"]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    /// Adds module-directed filter directives on top of `RUST_LOG`.
    #[must_use = "The builder must be configured before it can initialize the logger"]
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.config.env_filter = Some(directives.into());
        self
    }
}

impl LoggerBuilder<WithName> {
    /// Installs the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Io`] if the file appender cannot be prepared,
    /// or [`LoggerError::Init`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let mut filter = EnvFilter::builder()
            .with_default_directive(self.config.level.into())
            .from_env_lossy();
        if let Some(directives) = &self.config.env_filter {
            for directive in directives.split(',') {
                if let Ok(directive) = directive.trim().parse() {
                    filter = filter.add_directive(directive);
                }
            }
        }

        let console_layer = self.config.console.then(|| layer().with_target(true));

        let (file_layer, guard) = match &self.config.path {
            Some(dir) => {
                let appender = RollingFileAppender::builder()
                    .rotation(self.config.rotation.clone())
                    .filename_prefix(&self.name.0)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.config.max_files)
                    .build(dir)
                    .map_err(|e| LoggerError::Io {
                        message: e.to_string().into(),
                        context: Some(format!("Log directory: {}", dir.display()).into()),
                    })?;
                let (writer, guard) = tracing_appender::non_blocking(appender);
                (Some(layer().with_ansi(false).with_writer(writer)), Some(guard))
            },
            None => (None, None),
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
            .map_err(|e| LoggerError::Init { message: e.to_string().into(), context: None })?;

        Ok(Logger { guard })
    }
}

/// A handle keeping the non-blocking file writer alive.
///
/// Dropping the last clone of the guard flushes and stops the background
/// writer thread, so bind this for the lifetime of the application.
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use = "The logger is not configured until you call .init() on the builder"]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    /// The file writer guard, if file logging was enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}
