//! Log level definitions for DSV.
//!
//! This module provides the severity attached to every operation log record.

use alloc::string::{String, ToString};
use core::{fmt, str::FromStr};

/// Severity of an operation log record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Trace-level messages (per-step detail)
    Trace,
    /// Debug-level messages (useful for developers)
    Debug,
    /// Informational messages (successful operations)
    Info,
    /// Warning messages (rejected operations)
    Warn,
    /// Error messages (failed operations)
    Error,
    /// Critical error messages (unrecoverable front-end failures)
    Critical,
}

/// Error returned when a string names no log level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLogLevelError {
    /// The rejected input
    pub invalid_level: String,
}

impl fmt::Display for ParseLogLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid log level: {}", self.invalid_level)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseLogLevelError {}

impl From<ParseLogLevelError> for dsv_error::Error {
    fn from(_: ParseLogLevelError) -> Self {
        dsv_error::Error::invalid_operand("Invalid log level")
    }
}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: [(&str, LogLevel); 9] = [
            ("trace", LogLevel::Trace),
            ("debug", LogLevel::Debug),
            ("info", LogLevel::Info),
            ("warn", LogLevel::Warn),
            ("warning", LogLevel::Warn),
            ("error", LogLevel::Error),
            ("err", LogLevel::Error),
            ("critical", LogLevel::Critical),
            ("fatal", LogLevel::Critical),
        ];

        NAMES
            .iter()
            .find(|(name, _)| s.eq_ignore_ascii_case(name))
            .map(|&(_, level)| level)
            .ok_or_else(|| ParseLogLevelError { invalid_level: s.to_string() })
    }
}

impl LogLevel {
    /// Creates a `LogLevel` from a string, defaulting to Info for invalid
    /// levels
    #[must_use]
    pub fn from_string_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Self::Info)
    }

    /// Convert `LogLevel` to a string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "tracing")]
impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error | LogLevel::Critical => tracing::Level::ERROR,
        }
    }
}
