// DSV - dsv-foundation
// Module: BoundedQueue - fixed-capacity circular FIFO queue
// SW-REQ-ID: REQ_CORE_012
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity FIFO queue backed by a circular buffer.
//!
//! # Characteristics
//!
//! - **Single allocation**: slots are allocated once at construction
//! - **Const-time operations**: `enqueue()` and `dequeue()` are O(1)
//! - **Circular buffer**: head and tail wrap around the slot array

use crate::prelude::*;

/// FIFO queue of `i32` with a capacity fixed at construction.
///
/// # Invariants
///
/// 1. `len <= capacity` always holds
/// 2. `head < capacity` whenever `capacity > 0`
/// 3. The element at logical position `i` lives in slot
///    `(head + i) % capacity`
///
/// # Examples
///
/// ```
/// use dsv_foundation::BoundedQueue;
///
/// let mut queue = BoundedQueue::new(3);
/// queue.enqueue(1)?;
/// queue.enqueue(2)?;
/// queue.enqueue(3)?;
/// assert!(queue.enqueue(4).is_err()); // Full
///
/// assert_eq!(queue.dequeue()?, 1);
/// queue.enqueue(4)?; // Wraps around
/// assert_eq!(queue.to_vec(), vec![2, 3, 4]);
/// # Ok::<(), dsv_error::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BoundedQueue {
    /// Slot storage for the circular buffer
    slots: Box<[i32]>,

    /// Slot index of the front element
    head: usize,

    /// Number of elements currently in the queue
    /// Invariant: len <= slots.len()
    len: usize,
}

impl BoundedQueue {
    /// Creates an empty queue holding at most `capacity` elements.
    ///
    /// All `capacity` slots are allocated up front.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity].into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    /// Adds `value` at the rear.
    ///
    /// # Errors
    ///
    /// Returns an `Overflow` error when the queue is full.
    pub fn enqueue(&mut self, value: i32) -> Result<()> {
        if self.len >= self.slots.len() {
            return Err(helpers::queue_overflow_error());
        }

        let tail = (self.head + self.len) % self.slots.len();
        self.slots[tail] = value;
        self.len += 1;

        trace_op!(value, tail, len = self.len, "queue enqueue");
        Ok(())
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns an `Underflow` error when the queue is empty.
    pub fn dequeue(&mut self) -> Result<i32> {
        if self.len == 0 {
            return Err(helpers::queue_underflow_error());
        }

        let value = self.slots[self.head];

        // Circular wraparound
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;

        trace_op!(value, head = self.head, len = self.len, "queue dequeue");
        Ok(value)
    }

    /// Returns the front element without removing it.
    ///
    /// # Errors
    ///
    /// Returns an `EmptyStructure` error when the queue is empty.
    pub fn peek(&self) -> Result<i32> {
        if self.len == 0 {
            return Err(Error::empty_structure("Queue is empty"));
        }
        Ok(self.slots[self.head])
    }

    /// Element at logical position `index`, counted from the front.
    ///
    /// # Errors
    ///
    /// Returns an `IndexOutOfRange` error if `index >= len`.
    pub fn get(&self, index: usize) -> Result<i32> {
        if index >= self.len {
            return Err(helpers::invalid_index_error());
        }
        Ok(self.slots[(self.head + index) % self.slots.len()])
    }

    /// Fixed capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the current length.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the queue is full.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Removes every element and rewinds the buffer.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Iterator over the elements from front to rear.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> BoundedQueueIter<'_> {
        BoundedQueueIter {
            queue: self,
            index: 0,
        }
    }

    /// Elements from front to rear.
    #[must_use]
    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }
}

impl PartialEq for BoundedQueue {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity() && self.iter().eq(other.iter())
    }
}

impl Eq for BoundedQueue {}

impl DataStructure for BoundedQueue {
    fn name(&self) -> &'static str {
        "queue"
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        BoundedQueue::clear(self);
    }

    fn contents(&self) -> Vec<i32> {
        self.to_vec()
    }
}

impl BoundedCapacity for BoundedQueue {
    fn capacity(&self) -> usize {
        self.slots.len()
    }
}

/// Iterator over a [`BoundedQueue`] in FIFO order
#[derive(Debug, Clone)]
pub struct BoundedQueueIter<'a> {
    queue: &'a BoundedQueue,
    index: usize,
}

impl Iterator for BoundedQueueIter<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.queue.len {
            // Calculate actual position in circular buffer
            let pos = (self.queue.head + self.index) % self.queue.slots.len();
            self.index += 1;
            Some(self.queue.slots[pos])
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundedQueueIter<'_> {}

impl FusedIterator for BoundedQueueIter<'_> {}

impl<'a> IntoIterator for &'a BoundedQueue {
    type Item = i32;
    type IntoIter = BoundedQueueIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use dsv_error::ErrorKind;

    use super::*;

    #[test]
    fn test_new() {
        let queue = BoundedQueue::new(10);
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 10);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_enqueue_dequeue_fifo() -> Result<()> {
        let mut queue = BoundedQueue::new(5);
        queue.enqueue(1)?;
        queue.enqueue(2)?;
        queue.enqueue(3)?;

        assert_eq!(queue.dequeue()?, 1);
        assert_eq!(queue.dequeue()?, 2);
        assert_eq!(queue.dequeue()?, 3);
        assert_eq!(queue.dequeue().unwrap_err().kind(), ErrorKind::Underflow);
        Ok(())
    }

    #[test]
    fn test_circular_buffer() -> Result<()> {
        let mut queue = BoundedQueue::new(3);

        // Fill
        queue.enqueue(1)?;
        queue.enqueue(2)?;
        queue.enqueue(3)?;
        assert!(queue.is_full());
        assert_eq!(queue.enqueue(4).unwrap_err().kind(), ErrorKind::Overflow);

        // Pop 2, push 2 (wraps)
        assert_eq!(queue.dequeue()?, 1);
        assert_eq!(queue.dequeue()?, 2);
        queue.enqueue(4)?;
        queue.enqueue(5)?;

        assert_eq!(queue.to_vec(), vec![3, 4, 5]);
        assert_eq!(queue.get(0)?, 3);
        assert_eq!(queue.get(2)?, 5);
        assert!(queue.get(3).is_err());
        Ok(())
    }

    #[test]
    fn test_peek() -> Result<()> {
        let mut queue = BoundedQueue::new(2);
        assert_eq!(queue.peek().unwrap_err().kind(), ErrorKind::EmptyStructure);

        queue.enqueue(9)?;
        queue.enqueue(8)?;
        assert_eq!(queue.peek()?, 9);
        assert_eq!(queue.len(), 2);
        Ok(())
    }

    #[test]
    fn test_clear_rewinds() -> Result<()> {
        let mut queue = BoundedQueue::new(2);
        queue.enqueue(1)?;
        queue.dequeue()?;
        queue.enqueue(2)?;
        queue.clear();

        assert!(queue.is_empty());
        queue.enqueue(3)?;
        queue.enqueue(4)?;
        assert_eq!(queue.to_vec(), vec![3, 4]);
        Ok(())
    }

    #[test]
    fn test_zero_capacity() {
        let mut queue = BoundedQueue::new(0);
        assert!(queue.is_full());
        assert_eq!(queue.enqueue(1).unwrap_err().kind(), ErrorKind::Overflow);
        assert_eq!(queue.dequeue().unwrap_err().kind(), ErrorKind::Underflow);
        assert_eq!(queue.iter().count(), 0);
    }

    #[test]
    fn test_iterator_size_hint() -> Result<()> {
        let mut queue = BoundedQueue::new(4);
        queue.enqueue(1)?;
        queue.enqueue(2)?;

        let mut iter = queue.iter();
        assert_eq!(iter.len(), 2);
        iter.next();
        assert_eq!(iter.len(), 1);
        Ok(())
    }
}
