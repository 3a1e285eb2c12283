//! Operation log records for DSV.
//!
//! A [`LogOperation`] is the status line a front end shows after driving a
//! structure, for example `"Pushed: 5"` or `"Stack Underflow"`.

use alloc::string::String;

use crate::level::LogLevel;

/// One status record produced by a front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOperation {
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Structure the operation targeted (optional)
    pub structure: Option<String>,
}

impl LogOperation {
    /// Create a new log operation
    #[must_use]
    pub const fn new(level: LogLevel, message: String) -> Self {
        Self { level, message, structure: None }
    }

    /// Create a new log operation tagged with the structure it targeted
    pub fn with_structure<S1: Into<String>, S2: Into<String>>(
        level: LogLevel,
        message: S1,
        structure: S2,
    ) -> Self {
        Self { level, message: message.into(), structure: Some(structure.into()) }
    }
}
