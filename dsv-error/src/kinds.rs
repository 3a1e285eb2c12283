// DSV - dsv-error
// Module: DSV Error Kinds
// SW-REQ-ID: REQ_ERROR_002
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error kinds for DSV.
//!
//! [`ErrorKind`] is the closed set of recoverable conditions a caller has to
//! handle. Several codes can share one kind (every operand validation code is
//! an [`ErrorKind::InvalidOperand`]).

use core::fmt;

/// The failure taxonomy of the data structure core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Index or position outside the valid bound for the operation
    IndexOutOfRange,
    /// Insertion into a bounded stack or queue at full capacity
    Overflow,
    /// Removal from an empty stack or queue
    Underflow,
    /// Peek or removal on an empty structure
    EmptyStructure,
    /// Insertion of a value already present in a search tree
    DuplicateKey,
    /// Deletion of an absent value
    NotFound,
    /// Caller-supplied operand failed validation before reaching the core
    InvalidOperand,
    /// Anything not covered above
    Unknown,
}

impl ErrorKind {
    /// Stable, machine-readable name of the kind
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IndexOutOfRange => "IndexOutOfRange",
            Self::Overflow => "Overflow",
            Self::Underflow => "Underflow",
            Self::EmptyStructure => "EmptyStructure",
            Self::DuplicateKey => "DuplicateKey",
            Self::NotFound => "NotFound",
            Self::InvalidOperand => "InvalidOperand",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", ErrorKind::Overflow), "Overflow");
        assert_eq!(ErrorKind::IndexOutOfRange.to_string(), "IndexOutOfRange");
    }
}
