// DSV - dsv-foundation
// Module: Graph - adjacency-list graph with BFS and DFS
// SW-REQ-ID: REQ_CORE_015
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Adjacency-list graph over integer vertex ids.
//!
//! The graph is either directed or undirected for its whole lifetime. In an
//! undirected graph every edge is stored in both endpoint lists. Neighbour
//! lists keep insertion order, which fixes the visiting order of both
//! traversals. Vertices are kept in ascending id order.

use crate::prelude::*;

/// Graph of `i32` vertex ids stored as adjacency lists.
///
/// # Invariants
///
/// 1. Every id in a neighbour list is itself a vertex
/// 2. No neighbour list contains the same id twice
/// 3. Undirected: `b` is in `a`'s list exactly when `a` is in `b`'s list
///
/// # Examples
///
/// ```
/// use dsv_foundation::Graph;
///
/// let mut graph = Graph::new(false);
/// graph.add_edge(1, 2);
/// graph.add_edge(1, 3);
/// graph.add_edge(2, 4);
///
/// assert_eq!(graph.bfs(1), vec![1, 2, 3, 4]);
/// assert_eq!(graph.dfs(1), vec![1, 2, 4, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<i32, Vec<i32>>,
    directed: bool,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub const fn new(directed: bool) -> Self {
        Self {
            adjacency: BTreeMap::new(),
            directed,
        }
    }

    /// Returns `true` for a directed graph.
    #[inline]
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Adds vertex `id` with no edges.
    ///
    /// Returns `false` if the vertex already existed.
    pub fn add_vertex(&mut self, id: i32) -> bool {
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id, Vec::new());
        trace_op!(id, vertices = self.adjacency.len(), "graph add vertex");
        true
    }

    /// Adds the edge `from -> to`, creating missing endpoints.
    ///
    /// An undirected graph also records `to -> from`. Returns `false` if the
    /// edge was already present.
    pub fn add_edge(&mut self, from: i32, to: i32) -> bool {
        self.add_vertex(from);
        self.add_vertex(to);

        let mut added = Self::link(&mut self.adjacency, from, to);
        if !self.directed {
            added |= Self::link(&mut self.adjacency, to, from);
        }

        trace_op!(from, to, added, "graph add edge");
        added
    }

    /// Removes vertex `id` and every edge touching it.
    ///
    /// Returns `false` if the vertex did not exist.
    pub fn remove_vertex(&mut self, id: i32) -> bool {
        if self.adjacency.remove(&id).is_none() {
            return false;
        }
        for neighbours in self.adjacency.values_mut() {
            neighbours.retain(|&neighbour| neighbour != id);
        }

        trace_op!(id, vertices = self.adjacency.len(), "graph remove vertex");
        true
    }

    /// Removes the edge `from -> to` (and `to -> from` when undirected).
    ///
    /// Endpoints stay in the graph. Returns `false` if no edge was removed.
    pub fn remove_edge(&mut self, from: i32, to: i32) -> bool {
        let mut removed = Self::unlink(&mut self.adjacency, from, to);
        if !self.directed {
            removed |= Self::unlink(&mut self.adjacency, to, from);
        }

        trace_op!(from, to, removed, "graph remove edge");
        removed
    }

    /// Breadth-first visiting order from `start`.
    ///
    /// Neighbours are enqueued in list order. An unknown `start` yields an
    /// empty order.
    #[must_use]
    pub fn bfs(&self, start: i32) -> Vec<i32> {
        enter_span!(traversal("bfs", start, self.adjacency.len()));

        let mut order = Vec::new();
        if !self.adjacency.contains_key(&start) {
            return order;
        }

        let mut visited = BTreeSet::from([start]);
        let mut frontier = VecDeque::from([start]);

        while let Some(vertex) = frontier.pop_front() {
            order.push(vertex);
            for &neighbour in self.neighbors(vertex) {
                if visited.insert(neighbour) {
                    frontier.push_back(neighbour);
                }
            }
        }
        order
    }

    /// Depth-first pre-order from `start`.
    ///
    /// Visits neighbours in list order, descending into each unvisited one
    /// before moving to the next. An unknown `start` yields an empty order.
    #[must_use]
    pub fn dfs(&self, start: i32) -> Vec<i32> {
        enter_span!(traversal("dfs", start, self.adjacency.len()));

        let mut order = Vec::new();
        if !self.adjacency.contains_key(&start) {
            return order;
        }

        let mut visited = BTreeSet::from([start]);
        order.push(start);

        // (vertex, index of the next neighbour to try)
        let mut frames: Vec<(i32, usize)> = vec![(start, 0)];

        while let Some(frame) = frames.last_mut() {
            let (vertex, cursor) = *frame;
            let Some(&neighbour) = self.neighbors(vertex).get(cursor) else {
                frames.pop();
                continue;
            };
            frame.1 += 1;

            if visited.insert(neighbour) {
                order.push(neighbour);
                frames.push((neighbour, 0));
            }
        }
        order
    }

    /// Neighbour list of `id` in insertion order, empty for unknown ids.
    #[must_use]
    pub fn neighbors(&self, id: i32) -> &[i32] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns `true` if `id` is a vertex.
    #[must_use]
    pub fn has_vertex(&self, id: i32) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Returns `true` if `to` is in the neighbour list of `from`.
    #[must_use]
    pub fn has_edge(&self, from: i32, to: i32) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// Vertex ids in ascending order.
    #[must_use]
    pub fn vertices(&self) -> Vec<i32> {
        self.adjacency.keys().copied().collect()
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges. Each undirected edge counts once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.values().map(Vec::len).sum();
        if self.directed {
            return entries;
        }

        // Self-loops occupy a single list entry
        let loops = self
            .adjacency
            .iter()
            .filter(|&(vertex, neighbours)| neighbours.contains(vertex))
            .count();
        (entries + loops) / 2
    }

    /// Returns `true` if the graph has no vertex.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Removes every vertex and edge. Directedness is kept.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    fn link(adjacency: &mut BTreeMap<i32, Vec<i32>>, from: i32, to: i32) -> bool {
        match adjacency.get_mut(&from) {
            Some(neighbours) if !neighbours.contains(&to) => {
                neighbours.push(to);
                true
            }
            _ => false,
        }
    }

    fn unlink(adjacency: &mut BTreeMap<i32, Vec<i32>>, from: i32, to: i32) -> bool {
        let Some(neighbours) = adjacency.get_mut(&from) else {
            return false;
        };
        let before = neighbours.len();
        neighbours.retain(|&neighbour| neighbour != to);
        neighbours.len() != before
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DataStructure for Graph {
    fn name(&self) -> &'static str {
        "graph"
    }

    fn len(&self) -> usize {
        self.adjacency.len()
    }

    fn clear(&mut self) {
        Graph::clear(self);
    }

    fn contents(&self) -> Vec<i32> {
        self.vertices()
    }
}
