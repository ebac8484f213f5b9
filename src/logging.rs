//! Logger setup
//!
//! `RUST_LOG` controls filtering as usual. The TUI owns the terminal, so it
//! logs to a file when one is given and stays silent otherwise.

use env_logger::{Builder, Env, Target};
use log::SetLoggerError;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

/// Where log records go
pub enum LogOutput<'a> {
    Stderr,
    File(&'a Path),
    Off,
}

/// Pick the output for a mode: a log file always wins, otherwise the TUI is silent
#[must_use]
pub fn output_for(log_file: Option<&Path>, uses_terminal_ui: bool) -> LogOutput<'_> {
    match (log_file, uses_terminal_ui) {
        (Some(path), _) => LogOutput::File(path),
        (None, true) => LogOutput::Off,
        (None, false) => LogOutput::Stderr,
    }
}

/// Error type for logger setup
#[derive(Debug)]
pub enum LoggingError {
    LogFile(io::Error),
    AlreadyInstalled(SetLoggerError),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LogFile(e) => write!(f, "Cannot create log file: {e}"),
            Self::AlreadyInstalled(e) => write!(f, "Logger already installed: {e}"),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LogFile(e) => Some(e),
            Self::AlreadyInstalled(e) => Some(e),
        }
    }
}

/// Install the global logger
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a global logger is
/// already installed.
pub fn init(output: LogOutput<'_>) -> Result<(), LoggingError> {
    let target = match output {
        LogOutput::Stderr => Target::Stderr,
        LogOutput::File(path) => {
            Target::Pipe(Box::new(File::create(path).map_err(LoggingError::LogFile)?))
        }
        // No logger installed: every log macro is a no-op
        LogOutput::Off => return Ok(()),
    };

    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(target)
        .try_init()
        .map_err(LoggingError::AlreadyInstalled)
}
