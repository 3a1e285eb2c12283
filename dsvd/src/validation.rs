//! Operand parsing for the DSV daemon
//!
//! Requests carry operands as text. Values are checked against the
//! configured range, indices must be non-negative, and edge operands come as
//! a whitespace-separated pair.

use dsv_error::{codes, helpers, Error, Result};

use crate::config::DaemonConfig;

/// Range-checking operand parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    min: i32,
    max: i32,
}

impl Validator {
    /// A validator accepting values in `min..=max`
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// A validator using the configured value range
    #[must_use]
    pub const fn from_config(config: &DaemonConfig) -> Self {
        Self::new(config.value_min, config.value_max)
    }

    /// Parse a value operand.
    ///
    /// Surrounding whitespace is ignored.
    pub fn operand(&self, text: &str) -> Result<i32> {
        let text = text.trim();
        if text.is_empty() {
            return Err(helpers::empty_operand_error("Input cannot be empty"));
        }

        let value: i32 = text.parse()?;
        if value < self.min || value > self.max {
            return Err(helpers::operand_out_of_range_error("Input out of range"));
        }
        Ok(value)
    }

    /// Human-readable text for `error`, with the range filled in
    #[must_use]
    pub fn describe(&self, error: &Error) -> String {
        if error.code == codes::OPERAND_OUT_OF_RANGE {
            format!("Input must be between {} and {}", self.min, self.max)
        } else {
            error.message.to_string()
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::from_config(&DaemonConfig::default())
    }
}

/// Parse a value operand in `min..=max`
pub fn parse_operand(text: &str, min: i32, max: i32) -> Result<i32> {
    Validator::new(min, max).operand(text)
}

/// Parse a non-negative index operand
pub fn parse_index(text: &str) -> Result<usize> {
    let text = text.trim();
    if text.is_empty() {
        return Err(helpers::empty_operand_error("Please enter an index"));
    }

    let index: i64 = text.parse()?;
    usize::try_from(index).map_err(|_| helpers::invalid_index_error())
}

/// Split `"from to"` into its two halves
pub fn split_pair(text: &str) -> Result<(&str, &str)> {
    let mut parts = text.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(from), Some(to), None) => Ok((from, to)),
        (None, ..) => Err(helpers::empty_operand_error("Please enter edge (format: 'from to')")),
        _ => Err(helpers::operand_count_error("Invalid format. Use: from to")),
    }
}
