//! Log handler registry for DSV.
//!
//! Front ends register any number of handlers and every [`LogOperation`] is
//! handed to each of them in registration order.

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

#[cfg(feature = "tracing")]
use crate::level::LogLevel;
use crate::operation::LogOperation;

/// Function type for handling log operations
pub type LogHandler = Box<dyn Fn(&LogOperation) + Send + Sync>;

/// Fan-out registry of log handlers
#[derive(Default)]
pub struct LogRegistry {
    handlers: Vec<LogHandler>,
}

impl LogRegistry {
    /// Create a registry with no handler
    #[must_use]
    pub const fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Register a log handler
    pub fn register_handler<F>(&mut self, handler: F)
    where
        F: Fn(&LogOperation) + Send + Sync + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Hand `operation` to every registered handler
    pub fn handle_log(&self, operation: &LogOperation) {
        for handler in &self.handlers {
            handler(operation);
        }
    }

    /// Check if a log handler is registered
    #[must_use]
    pub fn has_log_handler(&self) -> bool {
        !self.handlers.is_empty()
    }

    /// Number of registered handlers
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl fmt::Debug for LogRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRegistry")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// A handler that re-emits every operation as a `tracing` event
///
/// The operation level picks the event level. `Critical` maps to `ERROR`
/// with the original level kept in the `level` field.
#[cfg(feature = "tracing")]
#[must_use]
pub fn tracing_handler() -> impl Fn(&LogOperation) + Send + Sync + 'static {
    |operation: &LogOperation| {
        let structure = operation.structure.as_deref().unwrap_or("-");
        match operation.level {
            LogLevel::Trace => {
                tracing::trace!(structure, level = %operation.level, "{}", operation.message);
            }
            LogLevel::Debug => {
                tracing::debug!(structure, level = %operation.level, "{}", operation.message);
            }
            LogLevel::Info => {
                tracing::info!(structure, level = %operation.level, "{}", operation.message);
            }
            LogLevel::Warn => {
                tracing::warn!(structure, level = %operation.level, "{}", operation.message);
            }
            LogLevel::Error | LogLevel::Critical => {
                tracing::error!(structure, level = %operation.level, "{}", operation.message);
            }
        }
    }
}
