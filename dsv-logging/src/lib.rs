//! # DSV Logging
//!
//! Operation log infrastructure for DSV front ends.
//!
//! Every operation a front end performs on a structure produces a
//! [`LogOperation`]: a level, a human-readable status message and the name
//! of the structure it targeted. A [`LogRegistry`] fans those records out to
//! any number of handlers (a terminal status line, a `tracing` bridge, a test
//! collector).

// DSV - dsv-logging
// Module: Logging Infrastructure
// SW-REQ-ID: REQ_LOG_001
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// Reexports for convenience
pub use dsv_error::{Error, Result};

/// Log handler registry.
///
/// Handlers are boxed closures; the registry calls each of them in
/// registration order.
pub mod handler;

/// Log level definitions for categorizing message severity.
pub mod level;

/// Log operation records.
pub mod operation;

// Reexport types
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub use handler::tracing_handler;
pub use handler::{LogHandler, LogRegistry};
pub use level::{LogLevel, ParseLogLevelError};
pub use operation::LogOperation;
