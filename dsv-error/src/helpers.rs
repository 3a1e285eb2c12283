// DSV - dsv-error
// Module: DSV Error Helpers
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error helper functions for common error patterns.
//!
//! Each structure names itself in its messages ("Stack Overflow", "Queue
//! Underflow") so front ends can show the message verbatim.

use crate::{codes, Error, ErrorCategory};

/// Create a stack overflow error
#[must_use]
pub const fn stack_overflow_error() -> Error {
    Error::overflow("Stack Overflow")
}

/// Create a stack underflow error
#[must_use]
pub const fn stack_underflow_error() -> Error {
    Error::underflow("Stack Underflow")
}

/// Create a queue overflow error
#[must_use]
pub const fn queue_overflow_error() -> Error {
    Error::overflow("Queue Overflow")
}

/// Create a queue underflow error
#[must_use]
pub const fn queue_underflow_error() -> Error {
    Error::underflow("Queue Underflow")
}

/// Create an invalid index error
#[must_use]
pub const fn invalid_index_error() -> Error {
    Error::index_out_of_range("Invalid index")
}

/// Create an empty operand error
#[must_use]
pub const fn empty_operand_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Validation, codes::EMPTY_OPERAND, message)
}

/// Create an operand out of range error
#[must_use]
pub const fn operand_out_of_range_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Validation, codes::OPERAND_OUT_OF_RANGE, message)
}

/// Create an unknown operation error
#[must_use]
pub const fn unknown_operation_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Validation, codes::UNKNOWN_OPERATION, message)
}

/// Create an operand count mismatch error
#[must_use]
pub const fn operand_count_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Validation, codes::OPERAND_COUNT_MISMATCH, message)
}
