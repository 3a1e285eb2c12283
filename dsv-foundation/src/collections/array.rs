// DSV - dsv-foundation
// Module: BoundedArray - growable index-addressed sequence
// SW-REQ-ID: REQ_CORE_010
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Index-addressed sequence with a logical capacity that doubles on demand.
//!
//! # Characteristics
//!
//! - **Contiguous**: elements occupy positions `0..len` with no gaps
//! - **Shifting**: insert and delete move the tail one slot
//! - **Doubling growth**: a full array doubles its capacity before inserting
//!   (a zero capacity grows to one)

use crate::prelude::*;

/// Growable index-addressed array of `i32`.
///
/// # Invariants
///
/// 1. `len <= capacity` always holds
/// 2. Capacity never shrinks, not even on [`clear`](Self::clear)
///
/// # Examples
///
/// ```
/// use dsv_foundation::BoundedArray;
///
/// let mut array = BoundedArray::new(2);
/// array.insert(0, 10)?;
/// array.insert(1, 20)?;
/// array.insert(1, 15)?;
///
/// assert_eq!(array.as_slice(), &[10, 15, 20]);
/// assert_eq!(array.capacity(), 4);
/// # Ok::<(), dsv_error::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedArray {
    /// Stored elements, `data.len()` is the logical length
    data: Vec<i32>,

    /// Logical capacity
    /// Invariant: data.len() <= capacity
    capacity: usize,
}

impl BoundedArray {
    /// Creates an empty array with the given logical capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::new(),
            capacity,
        }
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// `index == len` appends. A full array doubles its capacity first.
    ///
    /// # Errors
    ///
    /// Returns an `IndexOutOfRange` error if `index > len`. The array is
    /// unchanged in that case.
    pub fn insert(&mut self, index: usize, value: i32) -> Result<()> {
        if index > self.data.len() {
            return Err(helpers::invalid_index_error());
        }

        if self.data.len() >= self.capacity {
            self.grow();
        }

        self.data.insert(index, value);
        trace_op!(index, value, len = self.data.len(), "array insert");
        Ok(())
    }

    /// Appends `value` at the end, growing if needed.
    pub fn push(&mut self, value: i32) {
        if self.data.len() >= self.capacity {
            self.grow();
        }
        self.data.push(value);
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left.
    ///
    /// # Errors
    ///
    /// Returns an `IndexOutOfRange` error if `index >= len`.
    pub fn delete(&mut self, index: usize) -> Result<i32> {
        if index >= self.data.len() {
            return Err(helpers::invalid_index_error());
        }

        let value = self.data.remove(index);
        trace_op!(index, value, len = self.data.len(), "array delete");
        Ok(value)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an `IndexOutOfRange` error if `index >= len`.
    pub fn get(&self, index: usize) -> Result<i32> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(helpers::invalid_index_error)
    }

    /// Returns the first index holding `value`, if any.
    #[must_use]
    pub fn search(&self, value: i32) -> Option<usize> {
        self.data.iter().position(|&candidate| candidate == value)
    }

    /// Logical capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if no element is stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Elements in index order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Iterator over the elements in index order.
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, i32>> {
        self.data.iter().copied()
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity.saturating_mul(2).max(1);
        enter_span!(growth(self.capacity, new_capacity));
        self.capacity = new_capacity;
    }
}

impl Default for BoundedArray {
    fn default() -> Self {
        Self::new(10)
    }
}

impl DataStructure for BoundedArray {
    fn name(&self) -> &'static str {
        "array"
    }

    fn len(&self) -> usize {
        BoundedArray::len(self)
    }

    fn clear(&mut self) {
        BoundedArray::clear(self);
    }

    fn contents(&self) -> Vec<i32> {
        self.data.clone()
    }
}

impl BoundedCapacity for BoundedArray {
    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<'a> IntoIterator for &'a BoundedArray {
    type Item = i32;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, i32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
