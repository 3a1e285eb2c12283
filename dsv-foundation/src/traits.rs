// DSV - dsv-foundation
// Module: Structure traits
// SW-REQ-ID: REQ_CORE_002
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Traits implemented by every DSV structure.
//!
//! Front ends use these to report size and contents uniformly without
//! knowing which structure they hold.

use crate::prelude::Vec;

/// Operations common to all six structures
pub trait DataStructure {
    /// Short lowercase name of the structure kind (`"stack"`, `"bst"`, ...)
    fn name(&self) -> &'static str;

    /// Number of stored elements (vertices for a graph)
    fn len(&self) -> usize;

    /// `true` when no element is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every element
    fn clear(&mut self);

    /// Snapshot of the contents in the structure's natural order
    ///
    /// Index order for the array, bottom-to-top for the stack, front-to-rear
    /// for the queue, head-to-tail for the list, in-order for the tree and
    /// ascending vertex ids for the graph.
    fn contents(&self) -> Vec<i32>;
}

/// Structures with an explicit capacity
pub trait BoundedCapacity: DataStructure {
    /// Current capacity
    fn capacity(&self) -> usize;

    /// `true` when the next insertion would hit the capacity
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}
