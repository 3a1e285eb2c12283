// DSV - dsv-foundation
// Module: Prelude
// SW-REQ-ID: REQ_CORE_001
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for dsv-foundation
//!
//! Unified set of imports for both std and `no_std` + `alloc` builds. The
//! collections only ever name allocation types through this module.

pub use alloc::{
    boxed::Box,
    collections::{BTreeMap, BTreeSet, VecDeque},
    vec,
    vec::Vec,
};
pub use core::{
    cmp::Ordering,
    fmt,
    fmt::{Debug, Display},
    iter::FusedIterator,
    mem,
};

pub use dsv_error::{helpers, Error, ErrorCategory, ErrorKind, Result};

pub use crate::traits::{BoundedCapacity, DataStructure};
