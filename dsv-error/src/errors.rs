// DSV - dsv-error
// Module: DSV Error Types
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Unified error handling system for DSV
///
/// Every failure a data structure operation can report is a categorized
/// [`Error`] carrying a numeric code from [`codes`](crate::codes) and a static
/// message. Errors are `Copy` so a failing call never allocates.
use core::fmt;

use crate::{codes, kinds::ErrorKind, FromError, ToErrorCategory};

/// `Error` categories for DSV operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Index or position errors
    Index      = 1,
    /// Bounded capacity errors
    Capacity   = 2,
    /// Errors caused by the current state of a structure (e.g. empty)
    State      = 3,
    /// Keyed lookup errors (duplicates, missing keys)
    Key        = 4,
    /// Caller-supplied operand validation errors
    Validation = 5,
    /// Unknown errors
    Unknown    = 9,
}

/// Base trait for all error types
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// DSV `Error` type
///
/// This is the main error type for the data structure core and the layers
/// that drive it. It provides categorized errors with error codes and static
/// messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Index out of range error
    pub const INDEX_OUT_OF_RANGE: Self = Self::new(
        ErrorCategory::Index,
        codes::INDEX_OUT_OF_RANGE,
        "Index out of range",
    );
    /// Bounded structure overflow error
    pub const OVERFLOW: Self = Self::new(ErrorCategory::Capacity, codes::OVERFLOW, "Overflow");
    /// Bounded structure underflow error
    pub const UNDERFLOW: Self = Self::new(ErrorCategory::State, codes::UNDERFLOW, "Underflow");
    /// Empty structure error
    pub const EMPTY_STRUCTURE: Self = Self::new(
        ErrorCategory::State,
        codes::EMPTY_STRUCTURE,
        "Structure is empty",
    );
    /// Duplicate key error
    pub const DUPLICATE_KEY: Self = Self::new(
        ErrorCategory::Key,
        codes::DUPLICATE_KEY,
        "Duplicate value not allowed",
    );
    /// Value not found error
    pub const NOT_FOUND: Self = Self::new(ErrorCategory::Key, codes::NOT_FOUND, "Value not found");

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Map this error onto the closed taxonomy of failure kinds.
    ///
    /// Codes that belong to the validation range all collapse to
    /// [`ErrorKind::InvalidOperand`]; anything unrecognised is
    /// [`ErrorKind::Unknown`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self.code {
            codes::INDEX_OUT_OF_RANGE => ErrorKind::IndexOutOfRange,
            codes::OVERFLOW => ErrorKind::Overflow,
            codes::UNDERFLOW => ErrorKind::Underflow,
            codes::EMPTY_STRUCTURE => ErrorKind::EmptyStructure,
            codes::DUPLICATE_KEY => ErrorKind::DuplicateKey,
            codes::NOT_FOUND => ErrorKind::NotFound,
            5000..=5999 => ErrorKind::InvalidOperand,
            _ => ErrorKind::Unknown,
        }
    }

    /// Return a copy of this error with a more specific message
    #[must_use]
    pub const fn with_message(self, message: &'static str) -> Self {
        Self { message, ..self }
    }

    /// Check if this is an index error
    #[must_use]
    pub fn is_index_error(&self) -> bool {
        self.category == ErrorCategory::Index
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this is a state error
    #[must_use]
    pub fn is_state_error(&self) -> bool {
        self.category == ErrorCategory::State
    }

    /// Check if this is a key error
    #[must_use]
    pub fn is_key_error(&self) -> bool {
        self.category == ErrorCategory::Key
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        self.category == ErrorCategory::Validation
    }

    // Factory methods

    /// Create an index out of range error
    #[must_use]
    pub const fn index_out_of_range(message: &'static str) -> Self {
        Self::new(ErrorCategory::Index, codes::INDEX_OUT_OF_RANGE, message)
    }

    /// Create an overflow error
    #[must_use]
    pub const fn overflow(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::OVERFLOW, message)
    }

    /// Create an underflow error
    #[must_use]
    pub const fn underflow(message: &'static str) -> Self {
        Self::new(ErrorCategory::State, codes::UNDERFLOW, message)
    }

    /// Create an empty structure error
    #[must_use]
    pub const fn empty_structure(message: &'static str) -> Self {
        Self::new(ErrorCategory::State, codes::EMPTY_STRUCTURE, message)
    }

    /// Create a duplicate key error
    #[must_use]
    pub const fn duplicate_key(message: &'static str) -> Self {
        Self::new(ErrorCategory::Key, codes::DUPLICATE_KEY, message)
    }

    /// Create a not found error
    #[must_use]
    pub const fn not_found(message: &'static str) -> Self {
        Self::new(ErrorCategory::Key, codes::NOT_FOUND, message)
    }

    /// Create an invalid operand error
    #[must_use]
    pub const fn invalid_operand(message: &'static str) -> Self {
        Self::new(ErrorCategory::Validation, codes::INVALID_OPERAND, message)
    }

    /// Create an unknown error
    #[must_use]
    pub const fn unknown(message: &'static str) -> Self {
        Self::new(ErrorCategory::Unknown, codes::UNKNOWN_ERROR, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

impl From<core::num::ParseIntError> for Error {
    fn from(_: core::num::ParseIntError) -> Self {
        Self::invalid_operand("Input must be a valid integer")
    }
}

impl From<core::num::TryFromIntError> for Error {
    fn from(_: core::num::TryFromIntError) -> Self {
        Self::index_out_of_range("Index does not fit the platform index type")
    }
}

impl FromError<ErrorKind> for Error {
    fn from_error(kind: ErrorKind) -> Self {
        Self::from(kind)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::IndexOutOfRange => Self::INDEX_OUT_OF_RANGE,
            ErrorKind::Overflow => Self::OVERFLOW,
            ErrorKind::Underflow => Self::UNDERFLOW,
            ErrorKind::EmptyStructure => Self::EMPTY_STRUCTURE,
            ErrorKind::DuplicateKey => Self::DUPLICATE_KEY,
            ErrorKind::NotFound => Self::NOT_FOUND,
            ErrorKind::InvalidOperand => Self::invalid_operand("Invalid operand"),
            ErrorKind::Unknown => Self::unknown("Unknown error"),
        }
    }
}

impl ToErrorCategory for Error {
    fn to_category(&self) -> ErrorCategory {
        self.category
    }
}
