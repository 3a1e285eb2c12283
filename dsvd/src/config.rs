//! Configuration management for the DSV daemon
//!
//! Every key is optional in the TOML file; missing keys take the defaults of
//! [`DaemonConfig::default`].
//!
//! ```toml
//! array_capacity = 10
//! stack_capacity = 15
//! queue_capacity = 10
//! graph_directed = false
//! value_min = -9999
//! value_max = 9999
//! log_level = "info"
//! log_format = "pretty"
//! ```

use std::{fmt, path::Path, str::FromStr};

use anyhow::{bail, Context, Result};
use dsv_logging::LogLevel;
use serde::{Deserialize, Serialize};

/// Largest accepted array, stack or queue capacity
pub const MAX_CAPACITY: usize = 1 << 20;

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human readable output
    #[default]
    Pretty,
    /// Single-line human readable output
    Compact,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Daemon configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DaemonConfig {
    /// Initial capacity of the array
    pub array_capacity: usize,
    /// Fixed capacity of the stack
    pub stack_capacity: usize,
    /// Fixed capacity of the queue
    pub queue_capacity: usize,
    /// Whether the graph is directed
    pub graph_directed: bool,
    /// Smallest accepted operand value
    pub value_min:      i32,
    /// Largest accepted operand value
    pub value_max:      i32,
    /// Default tracing level when `RUST_LOG` is unset
    pub log_level:      String,
    /// Tracing output format
    pub log_format:     LogFormat,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            array_capacity: 10,
            stack_capacity: 15,
            queue_capacity: 10,
            graph_directed: false,
            value_min:      -9999,
            value_max:      9999,
            log_level:      "info".to_string(),
            log_format:     LogFormat::default(),
        }
    }
}

impl DaemonConfig {
    /// Load the configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no structure can work with
    pub fn validate(&self) -> Result<()> {
        for (key, capacity) in [
            ("array_capacity", self.array_capacity),
            ("stack_capacity", self.stack_capacity),
            ("queue_capacity", self.queue_capacity),
        ] {
            if capacity > MAX_CAPACITY {
                bail!("{key} ({capacity}) must not exceed {MAX_CAPACITY}");
            }
        }
        if self.value_min > self.value_max {
            bail!(
                "value_min ({}) must not exceed value_max ({})",
                self.value_min,
                self.value_max
            );
        }
        if let Err(err) = LogLevel::from_str(&self.log_level) {
            bail!("{err}");
        }
        Ok(())
    }

    /// The configured level, `Info` when unparseable
    #[must_use]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_string_or_default(&self.log_level)
    }
}
