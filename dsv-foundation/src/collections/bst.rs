// DSV - dsv-foundation
// Module: BinarySearchTree - unbalanced BST with unique keys
// SW-REQ-ID: REQ_CORE_014
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unbalanced binary search tree of unique `i32` keys.
//!
//! Insertion order decides the shape, so sorted input degenerates into a
//! chain. Every operation walks the tree with a loop or an explicit stack,
//! which keeps such chains safe to insert into, traverse and drop.

use crate::prelude::*;

type Link = Option<Box<TreeNode>>;

/// A node of a [`BinarySearchTree`]
#[derive(Debug)]
pub struct TreeNode {
    value: i32,
    left: Link,
    right: Link,
}

impl TreeNode {
    const fn leaf(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Key stored in this node
    #[inline]
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Left subtree, all keys smaller than [`value`](Self::value)
    #[inline]
    #[must_use]
    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    /// Right subtree, all keys greater than [`value`](Self::value)
    #[inline]
    #[must_use]
    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }
}

/// Binary search tree with unique keys.
///
/// # Invariants
///
/// 1. Every key in a left subtree is smaller than its ancestor's key
/// 2. Every key in a right subtree is greater than its ancestor's key
/// 3. No key appears twice
///
/// # Examples
///
/// ```
/// use dsv_foundation::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// for key in [50, 30, 70, 20, 40] {
///     tree.insert(key)?;
/// }
///
/// assert_eq!(tree.inorder(), vec![20, 30, 40, 50, 70]);
/// assert_eq!(tree.preorder(), vec![50, 30, 20, 40, 70]);
/// assert!(tree.insert(30).is_err()); // Duplicate
/// # Ok::<(), dsv_error::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct BinarySearchTree {
    root: Link,
    len: usize,
}

impl BinarySearchTree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `value` as a new leaf.
    ///
    /// # Errors
    ///
    /// Returns a `DuplicateKey` error if `value` is already present. The tree
    /// is unchanged in that case.
    pub fn insert(&mut self, value: i32) -> Result<()> {
        let mut link = &mut self.root;
        loop {
            match link {
                Some(node) => match value.cmp(&node.value) {
                    Ordering::Less => link = &mut node.left,
                    Ordering::Greater => link = &mut node.right,
                    Ordering::Equal => return Err(Error::DUPLICATE_KEY),
                },
                None => {
                    *link = Some(Box::new(TreeNode::leaf(value)));
                    break;
                }
            }
        }
        self.len += 1;

        trace_op!(value, len = self.len, "bst insert");
        Ok(())
    }

    /// Removes `value` from the tree.
    ///
    /// A node with two children takes the key of its in-order successor,
    /// which is then unlinked from the right subtree.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error if `value` is absent.
    pub fn delete(&mut self, value: i32) -> Result<()> {
        enter_span!(mutation("bst", "delete", self.len));

        let link = Self::find_link(&mut self.root, value).ok_or(Error::NOT_FOUND)?;
        Self::unlink(link);
        self.len -= 1;
        Ok(())
    }

    /// Returns `true` if `value` is present.
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Alias of [`contains`](Self::contains).
    #[inline]
    #[must_use]
    pub fn search(&self, value: i32) -> bool {
        self.contains(value)
    }

    /// Keys in ascending order (left, node, right).
    #[must_use]
    pub fn inorder(&self) -> Vec<i32> {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<&TreeNode> = Vec::new();
        let mut current = self.root.as_deref();

        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                keys.push(node.value);
                current = node.right.as_deref();
            }
        }
        keys
    }

    /// Keys in pre-order (node, left, right).
    #[must_use]
    pub fn preorder(&self) -> Vec<i32> {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<&TreeNode> = self.root.as_deref().into_iter().collect();

        while let Some(node) = stack.pop() {
            keys.push(node.value);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        keys
    }

    /// Keys in post-order (left, right, node).
    #[must_use]
    pub fn postorder(&self) -> Vec<i32> {
        // Node-right-left, reversed
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<&TreeNode> = self.root.as_deref().into_iter().collect();

        while let Some(node) = stack.pop() {
            keys.push(node.value);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        keys.reverse();
        keys
    }

    /// Number of levels, 0 for an empty tree.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&TreeNode> = self.root.as_deref().into_iter().collect();

        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }
        height
    }

    /// Smallest key.
    #[must_use]
    pub fn min(&self) -> Option<i32> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(node.value)
    }

    /// Largest key.
    #[must_use]
    pub fn max(&self) -> Option<i32> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(node.value)
    }

    /// Root node, `None` when empty.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    /// Number of keys.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no key.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Frees every node.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<TreeNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// The link slot holding the node keyed `value`.
    fn find_link(mut link: &mut Link, value: i32) -> Option<&mut Link> {
        loop {
            let key = link.as_ref()?.value;
            if key == value {
                return Some(link);
            }
            let node = link.as_mut()?;
            link = if value < key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
    }

    /// Replaces the node in `link` by what remains after removing it.
    fn unlink(link: &mut Link) {
        let Some(mut node) = link.take() else {
            return;
        };

        *link = match (node.left.is_some(), node.right.is_some()) {
            (false, false) => None,
            (true, false) => node.left.take(),
            (false, true) => node.right.take(),
            (true, true) => {
                if let Some(successor) = Self::take_min(&mut node.right) {
                    node.value = successor;
                }
                Some(node)
            }
        };
    }

    /// Unlinks the leftmost node of the subtree in `link` and returns its
    /// key.
    fn take_min(mut link: &mut Link) -> Option<i32> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }
        let node = link.take()?;
        let TreeNode { value, right, .. } = *node;
        *link = right;
        Some(value)
    }
}

impl Drop for BinarySearchTree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl DataStructure for BinarySearchTree {
    fn name(&self) -> &'static str {
        "bst"
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        BinarySearchTree::clear(self);
    }

    fn contents(&self) -> Vec<i32> {
        self.inorder()
    }
}
