// DSV - dsv-error
// Module: DSV Error Handling
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! DSV Error handling library
//!
//! This library provides the error handling system shared by the DSV data
//! structure core and the front ends that drive it.
//!
//! # Error Categories
//!
//! Errors are organized into categories, each with its own range of error
//! codes:
//!
//! ## Index Errors (1000-1999)
//! - Index out of range
//!
//! ## Capacity Errors (2000-2999)
//! - Overflow of a bounded stack or queue
//!
//! ## State Errors (3000-3999)
//! - Underflow
//! - Empty structure
//!
//! ## Key Errors (4000-4999)
//! - Duplicate key
//! - Not found
//!
//! ## Validation Errors (5000-5999)
//! - Invalid, empty or out-of-range operands
//! - Unknown operations
//!
//! # Usage
//!
//! ```
//! use dsv_error::{codes, helpers, Error, ErrorCategory, ErrorKind};
//!
//! let error = Error::new(ErrorCategory::Index, codes::INDEX_OUT_OF_RANGE, "Invalid index: 42");
//! assert_eq!(error.kind(), ErrorKind::IndexOutOfRange);
//!
//! let overflow = helpers::stack_overflow_error();
//! assert_eq!(overflow.kind(), ErrorKind::Overflow);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)] // Rule 2
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Error codes for dsv
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind definitions
pub mod kinds;

pub mod helpers;

// Re-export key types
pub use errors::{Error, ErrorCategory, ErrorSource};
pub use kinds::ErrorKind;

/// A specialized `Result` type for DSV operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error conversion trait for converting between error types
///
/// This trait provides a standardized way to convert between error types
/// across the DSV crates.
pub trait FromError<E> {
    /// Convert from the source error type to the target error type
    fn from_error(error: E) -> Self;
}

/// Error conversion trait for converting to specific error categories
pub trait ToErrorCategory {
    /// Convert the error to a specific category
    fn to_category(&self) -> ErrorCategory;
}
