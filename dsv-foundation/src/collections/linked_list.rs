// DSV - dsv-foundation
// Module: SinglyLinkedList - positional singly linked list
// SW-REQ-ID: REQ_CORE_013
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Singly linked list with positional insert and delete.
//!
//! Nodes are owned through `Option<Box<_>>` links. Every walk is a loop, and
//! the list frees its nodes one at a time on drop.

use crate::prelude::*;

type Link = Option<Box<ListNode>>;

/// A node of a [`SinglyLinkedList`]
#[derive(Debug)]
pub struct ListNode {
    value: i32,
    next: Link,
}

impl ListNode {
    /// Value stored in this node
    #[inline]
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Following node, `None` at the tail
    #[inline]
    #[must_use]
    pub fn next(&self) -> Option<&ListNode> {
        self.next.as_deref()
    }
}

/// Singly linked list of `i32`.
///
/// # Invariants
///
/// 1. `len` equals the number of reachable nodes
/// 2. The chain from `head` is finite and acyclic
///
/// # Examples
///
/// ```
/// use dsv_foundation::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.insert_head(10);
/// list.insert_tail(20);
/// list.insert_at(1, 15)?;
///
/// assert_eq!(list.to_vec(), vec![10, 15, 20]);
/// assert_eq!(list.search(20), Some(2));
/// # Ok::<(), dsv_error::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct SinglyLinkedList {
    head: Link,
    len: usize,
}

impl SinglyLinkedList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Inserts `value` before the current head.
    pub fn insert_head(&mut self, value: i32) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { value, next }));
        self.len += 1;
        trace_op!(value, len = self.len, "list insert head");
    }

    /// Appends `value` after the current tail.
    pub fn insert_tail(&mut self, value: i32) {
        let mut link = &mut self.head;
        loop {
            match link {
                Some(node) => link = &mut node.next,
                None => {
                    *link = Some(Box::new(ListNode { value, next: None }));
                    break;
                }
            }
        }
        self.len += 1;
        trace_op!(value, len = self.len, "list insert tail");
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// `0` behaves like [`insert_head`](Self::insert_head) and `len` like
    /// [`insert_tail`](Self::insert_tail).
    ///
    /// # Errors
    ///
    /// Returns an `IndexOutOfRange` error if `index > len`.
    pub fn insert_at(&mut self, index: usize, value: i32) -> Result<()> {
        if index > self.len {
            return Err(helpers::invalid_index_error());
        }

        let link = self.link_mut(index).ok_or_else(helpers::invalid_index_error)?;
        let next = link.take();
        *link = Some(Box::new(ListNode { value, next }));
        self.len += 1;

        trace_op!(index, value, len = self.len, "list insert at");
        Ok(())
    }

    /// Removes and returns the head value.
    ///
    /// # Errors
    ///
    /// Returns an `EmptyStructure` error when the list is empty.
    pub fn delete_head(&mut self) -> Result<i32> {
        let node = self
            .head
            .take()
            .ok_or(Error::empty_structure("List is empty"))?;
        let ListNode { value, next } = *node;
        self.head = next;
        self.len -= 1;

        trace_op!(value, len = self.len, "list delete head");
        Ok(value)
    }

    /// Removes and returns the value at position `index`.
    ///
    /// # Errors
    ///
    /// Returns an `IndexOutOfRange` error if `index >= len`.
    pub fn delete_at(&mut self, index: usize) -> Result<i32> {
        if index >= self.len {
            return Err(helpers::invalid_index_error());
        }

        let link = self.link_mut(index).ok_or_else(helpers::invalid_index_error)?;
        let node = link.take().ok_or_else(helpers::invalid_index_error)?;
        let ListNode { value, next } = *node;
        *link = next;
        self.len -= 1;

        trace_op!(index, value, len = self.len, "list delete at");
        Ok(value)
    }

    /// Value at position `index`.
    ///
    /// # Errors
    ///
    /// Returns an `IndexOutOfRange` error if `index >= len`.
    pub fn get(&self, index: usize) -> Result<i32> {
        self.iter()
            .nth(index)
            .ok_or_else(helpers::invalid_index_error)
    }

    /// Position of the first node holding `value`.
    #[must_use]
    pub fn search(&self, value: i32) -> Option<usize> {
        self.iter().position(|candidate| candidate == value)
    }

    /// First node, `None` when empty.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&ListNode> {
        self.head.as_deref()
    }

    /// Number of nodes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no nodes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Frees every node.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Iterator over the values from head to tail.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Values from head to tail.
    #[must_use]
    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// The link slot at position `index`: `head` for 0, the tail's `next`
    /// for `len`.
    fn link_mut(&mut self, index: usize) -> Option<&mut Link> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }
}

impl Drop for SinglyLinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for SinglyLinkedList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for SinglyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for SinglyLinkedList {}

impl FromIterator<i32> for SinglyLinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut link = &mut list.head;
        for value in iter {
            let node = link.insert(Box::new(ListNode { value, next: None }));
            link = &mut node.next;
            list.len += 1;
        }
        list
    }
}

impl DataStructure for SinglyLinkedList {
    fn name(&self) -> &'static str {
        "list"
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        SinglyLinkedList::clear(self);
    }

    fn contents(&self) -> Vec<i32> {
        self.to_vec()
    }
}

/// Iterator over a [`SinglyLinkedList`] from head to tail
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    next: Option<&'a ListNode>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a SinglyLinkedList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
