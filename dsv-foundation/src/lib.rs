//! Core data structures for DSV.
//!
//! This crate provides the six in-memory structures every DSV front end
//! drives: a growable index-addressed array, a bounded stack, a bounded
//! queue, a singly linked list, an unbalanced binary search tree and an
//! adjacency-list graph with breadth-first and depth-first traversal.
//!
//! Every structure stores `i32` values, is owned by exactly one caller and
//! reports failures as [`dsv_error::Error`] values. A failing operation never
//! leaves a structure partially mutated.
//!
//! # Feature Flags
//!
//! - `std`: Enables standard library support (default)
//! - `tracing`: Emits `tracing` spans and events around mutations and
//!   traversals
//!
//! Without `std` the crate builds as `no_std` + `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// DSV - dsv-foundation
// SW-REQ-ID: REQ_CORE_001
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

extern crate alloc;

#[macro_use]
mod macros;

// Prelude module for consistent imports across std and no_std environments
pub mod prelude;

/// The six data structures
pub mod collections;
/// Common traits shared by every structure
pub mod traits;

/// Tracing spans for structure operations
#[cfg(feature = "tracing")]
pub mod trace;

// Re-export error related types for convenience
pub use dsv_error::{codes, Error, ErrorCategory, ErrorKind};

/// Result type alias for DSV operations using `dsv_error::Error`
pub type DsvResult<T> = core::result::Result<T, Error>;

pub use collections::{
    BinarySearchTree, BoundedArray, BoundedQueue, BoundedStack, Graph, SinglyLinkedList,
};
pub use traits::{BoundedCapacity, DataStructure};
