//! # DSV Daemon library (dsvd)
//!
//! The request-driven front end for the DSV data structures.
//!
//! A [`Service`] owns exactly one instance of each structure for the life of
//! the process. Callers hand it [`Request`]s naming a structure, an operation
//! and text operands; every [`Response`] carries the outcome, a status
//! message and a full snapshot of the targeted structure.
//!
//! ```
//! use dsvd::{DaemonConfig, Request, Service, StructureKind};
//!
//! let mut service = Service::new(&DaemonConfig::default());
//! let response = service.handle(&Request::new(StructureKind::Stack, "push", ["5"]));
//!
//! assert!(response.success);
//! assert_eq!(response.message, "Pushed 5");
//! assert_eq!(response.elements, vec![5]);
//! ```

// DSV - dsvd
// Module: Daemon library
// SW-REQ-ID: REQ_FRONTEND_001
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Daemon configuration loaded from TOML
pub mod config;
/// JSON-lines request loop
pub mod server;
/// Request dispatch over the six structures
pub mod service;
/// Operand parsing and range checks
pub mod validation;

pub use config::{DaemonConfig, LogFormat, MAX_CAPACITY};
pub use server::{serve, ServeSummary};
pub use service::{Operand, Request, Response, Service, StructureKind};
pub use validation::{parse_index, parse_operand, split_pair, Validator};
