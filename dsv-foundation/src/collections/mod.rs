// DSV - dsv-foundation
// Module: Collections
// SW-REQ-ID: REQ_CORE_001
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The six DSV data structures.
//!
//! | Type | Discipline | Capacity |
//! |------|------------|----------|
//! | [`BoundedArray`] | index addressed | grows by doubling |
//! | [`BoundedStack`] | LIFO | fixed |
//! | [`BoundedQueue`] | FIFO ring buffer | fixed |
//! | [`SinglyLinkedList`] | positional | unbounded |
//! | [`BinarySearchTree`] | ordered, unique keys | unbounded |
//! | [`Graph`] | adjacency list | unbounded |
//!
//! Linked structures release their nodes iteratively, so dropping a long
//! list or a degenerate tree never recurses.

pub mod array;
pub mod bst;
pub mod graph;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use array::BoundedArray;
pub use bst::{BinarySearchTree, TreeNode};
pub use graph::Graph;
pub use linked_list::{ListNode, SinglyLinkedList};
pub use queue::{BoundedQueue, BoundedQueueIter};
pub use stack::BoundedStack;
