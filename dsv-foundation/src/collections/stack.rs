// DSV - dsv-foundation
// Module: BoundedStack - fixed-capacity LIFO stack
// SW-REQ-ID: REQ_CORE_011
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity LIFO stack.

use crate::prelude::*;

/// LIFO stack of `i32` with a capacity fixed at construction.
///
/// # Invariants
///
/// 1. `len <= capacity` always holds
/// 2. A rejected push or pop leaves the stack unchanged
///
/// # Examples
///
/// ```
/// use dsv_foundation::BoundedStack;
///
/// let mut stack = BoundedStack::new(2);
/// stack.push(1)?;
/// stack.push(2)?;
/// assert!(stack.push(3).is_err()); // Full
///
/// assert_eq!(stack.pop()?, 2);
/// assert_eq!(stack.peek()?, 1);
/// # Ok::<(), dsv_error::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack {
    /// Bottom at index 0, top at `len - 1`
    elements: Vec<i32>,
    capacity: usize,
}

impl BoundedStack {
    /// Creates an empty stack holding at most `capacity` elements.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            elements: Vec::new(),
            capacity,
        }
    }

    /// Pushes `value` on top.
    ///
    /// # Errors
    ///
    /// Returns an `Overflow` error when the stack is full.
    pub fn push(&mut self, value: i32) -> Result<()> {
        if self.elements.len() >= self.capacity {
            return Err(helpers::stack_overflow_error());
        }

        self.elements.push(value);
        trace_op!(value, len = self.elements.len(), "stack push");
        Ok(())
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns an `Underflow` error when the stack is empty.
    pub fn pop(&mut self) -> Result<i32> {
        let value = self.elements.pop().ok_or_else(helpers::stack_underflow_error)?;
        trace_op!(value, len = self.elements.len(), "stack pop");
        Ok(value)
    }

    /// Returns the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns an `EmptyStructure` error when the stack is empty.
    pub fn peek(&self) -> Result<i32> {
        self.elements
            .last()
            .copied()
            .ok_or(Error::empty_structure("Stack is empty"))
    }

    /// Element at `index`, counted from the bottom.
    ///
    /// # Errors
    ///
    /// Returns an `IndexOutOfRange` error if `index >= len`.
    pub fn get(&self, index: usize) -> Result<i32> {
        self.elements
            .get(index)
            .copied()
            .ok_or_else(helpers::invalid_index_error)
    }

    /// Fixed capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if the stack is full.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.elements.len() >= self.capacity
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Elements from bottom to top.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.elements
    }
}

impl DataStructure for BoundedStack {
    fn name(&self) -> &'static str {
        "stack"
    }

    fn len(&self) -> usize {
        BoundedStack::len(self)
    }

    fn clear(&mut self) {
        BoundedStack::clear(self);
    }

    fn contents(&self) -> Vec<i32> {
        self.elements.clone()
    }
}

impl BoundedCapacity for BoundedStack {
    fn capacity(&self) -> usize {
        self.capacity
    }
}
