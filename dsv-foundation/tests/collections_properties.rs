//! Property tests for the dsv-foundation collections
//!
//! Each structure is driven by a random operation sequence and compared
//! against a standard library model.

use std::collections::{BTreeSet, VecDeque};

use dsv_foundation::{
    BinarySearchTree, BoundedArray, BoundedQueue, BoundedStack, ErrorKind, Graph, SinglyLinkedList,
};
use proptest::prelude::*;
use proptest_derive::Arbitrary;

const TEST_CAPACITY: usize = 16;

#[derive(Debug, Clone, Arbitrary)]
enum ArrayOp {
    Insert(#[proptest(strategy = "0usize..24")] usize, i32),
    Delete(#[proptest(strategy = "0usize..24")] usize),
}

#[derive(Debug, Clone, Arbitrary)]
enum QueueOp {
    Enqueue(i32),
    Dequeue,
}

#[derive(Debug, Clone, Arbitrary)]
enum ListOp {
    InsertHead(i32),
    InsertTail(i32),
    InsertAt(#[proptest(strategy = "0usize..24")] usize, i32),
    DeleteHead,
    DeleteAt(#[proptest(strategy = "0usize..24")] usize),
}

#[derive(Debug, Clone, Arbitrary)]
enum TreeOp {
    Insert(#[proptest(strategy = "-50i32..50")] i32),
    Delete(#[proptest(strategy = "-50i32..50")] i32),
}

fn edges() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((0i32..12, 0i32..12), 0..40)
}

/// Hop distance from `start` to every reachable vertex
fn distances(graph: &Graph, start: i32) -> std::collections::BTreeMap<i32, usize> {
    let mut distance = std::collections::BTreeMap::from([(start, 0)]);
    let mut frontier = VecDeque::from([start]);
    while let Some(vertex) = frontier.pop_front() {
        let next = distance[&vertex] + 1;
        for &neighbour in graph.neighbors(vertex) {
            if !distance.contains_key(&neighbour) {
                distance.insert(neighbour, next);
                frontier.push_back(neighbour);
            }
        }
    }
    distance
}

proptest! {
    /// Property: size tracks successful inserts minus deletes, order is kept
    #[test]
    fn array_matches_vec_model(ops in prop::collection::vec(any::<ArrayOp>(), 0..64)) {
        let mut array = BoundedArray::new(2);
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                ArrayOp::Insert(index, value) => {
                    let result = array.insert(index, value);
                    if index <= model.len() {
                        prop_assert!(result.is_ok());
                        model.insert(index, value);
                    } else {
                        prop_assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::IndexOutOfRange));
                    }
                }
                ArrayOp::Delete(index) => {
                    let result = array.delete(index);
                    if index < model.len() {
                        prop_assert_eq!(result.ok(), Some(model.remove(index)));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
            }
            prop_assert!(array.len() <= array.capacity());
        }

        prop_assert_eq!(array.as_slice(), model.as_slice());
    }

    /// Property: popping everything returns the pushes reversed
    #[test]
    fn stack_pops_in_reverse(values in prop::collection::vec(any::<i32>(), 0..TEST_CAPACITY)) {
        let mut stack = BoundedStack::new(TEST_CAPACITY);
        for &value in &values {
            prop_assert!(stack.push(value).is_ok());
        }

        let mut popped = Vec::new();
        while let Ok(value) = stack.pop() {
            popped.push(value);
        }

        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(popped, expected);
    }

    /// Property: dequeuing everything returns the enqueues in order
    #[test]
    fn queue_is_fifo(values in prop::collection::vec(any::<i32>(), 0..TEST_CAPACITY)) {
        let mut queue = BoundedQueue::new(TEST_CAPACITY);
        for &value in &values {
            prop_assert!(queue.enqueue(value).is_ok());
        }

        let mut dequeued = Vec::new();
        while let Ok(value) = queue.dequeue() {
            dequeued.push(value);
        }
        prop_assert_eq!(dequeued, values);
    }

    /// Property: wraparound never reorders elements
    #[test]
    fn queue_matches_deque_model(ops in prop::collection::vec(any::<QueueOp>(), 0..64)) {
        let mut queue = BoundedQueue::new(5);
        let mut model: VecDeque<i32> = VecDeque::new();

        for op in ops {
            match op {
                QueueOp::Enqueue(value) => {
                    let result = queue.enqueue(value);
                    if model.len() < 5 {
                        prop_assert!(result.is_ok());
                        model.push_back(value);
                    } else {
                        prop_assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::Overflow));
                    }
                }
                QueueOp::Dequeue => {
                    prop_assert_eq!(queue.dequeue().ok(), model.pop_front());
                }
            }
        }

        prop_assert_eq!(queue.to_vec(), model.into_iter().collect::<Vec<_>>());
    }

    /// Property: list agrees with a vector for every positional operation
    #[test]
    fn list_matches_vec_model(ops in prop::collection::vec(any::<ListOp>(), 0..64)) {
        let mut list = SinglyLinkedList::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                ListOp::InsertHead(value) => {
                    list.insert_head(value);
                    model.insert(0, value);
                }
                ListOp::InsertTail(value) => {
                    list.insert_tail(value);
                    model.push(value);
                }
                ListOp::InsertAt(index, value) => {
                    let accepted = list.insert_at(index, value).is_ok();
                    prop_assert_eq!(accepted, index <= model.len());
                    if accepted {
                        model.insert(index, value);
                    }
                }
                ListOp::DeleteHead => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(list.delete_head().ok(), expected);
                }
                ListOp::DeleteAt(index) => {
                    let expected = (index < model.len()).then(|| model.remove(index));
                    prop_assert_eq!(list.delete_at(index).ok(), expected);
                }
            }
            prop_assert_eq!(list.len(), model.len());
        }

        prop_assert_eq!(list.to_vec(), model);
    }

    /// Property: in-order traversal stays strictly increasing
    #[test]
    fn bst_inorder_is_sorted(ops in prop::collection::vec(any::<TreeOp>(), 0..96)) {
        let mut tree = BinarySearchTree::new();
        let mut model: BTreeSet<i32> = BTreeSet::new();

        for op in ops {
            match op {
                TreeOp::Insert(key) => {
                    let before = tree.inorder();
                    match tree.insert(key) {
                        Ok(()) => {
                            prop_assert!(model.insert(key));
                        }
                        Err(err) => {
                            prop_assert_eq!(err.kind(), ErrorKind::DuplicateKey);
                            prop_assert_eq!(tree.inorder(), before);
                        }
                    }
                }
                TreeOp::Delete(key) => {
                    prop_assert_eq!(tree.delete(key).is_ok(), model.remove(&key));
                }
            }

            let keys = tree.inorder();
            prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert_eq!(keys, model.iter().copied().collect::<Vec<_>>());
            prop_assert_eq!(tree.len(), model.len());
        }
    }

    /// Property: both traversals visit exactly the reachable set, once each
    #[test]
    fn traversals_cover_reachable_set(edge_list in edges(), directed in any::<bool>(), start in 0i32..12) {
        let mut graph = Graph::new(directed);
        graph.add_vertex(start);
        for (from, to) in edge_list {
            graph.add_edge(from, to);
        }

        let reachable = distances(&graph, start);
        let expected: BTreeSet<i32> = reachable.keys().copied().collect();

        for order in [graph.bfs(start), graph.dfs(start)] {
            let visited: BTreeSet<i32> = order.iter().copied().collect();
            prop_assert_eq!(visited.len(), order.len());
            prop_assert_eq!(&visited, &expected);
            prop_assert_eq!(order.first().copied(), Some(start));
        }

        let bfs = graph.bfs(start);
        prop_assert!(bfs.windows(2).all(|pair| reachable[&pair[0]] <= reachable[&pair[1]]));
    }

    /// Property: undirected adjacency stays symmetric under removals
    #[test]
    fn undirected_graph_stays_symmetric(edge_list in edges(), removals in prop::collection::vec(0i32..12, 0..6)) {
        let mut graph = Graph::new(false);
        for (from, to) in edge_list {
            graph.add_edge(from, to);
        }
        for vertex in removals {
            graph.remove_vertex(vertex);
        }

        for vertex in graph.vertices() {
            for &neighbour in graph.neighbors(vertex) {
                prop_assert!(graph.has_vertex(neighbour));
                prop_assert!(graph.has_edge(neighbour, vertex));
            }
        }
    }
}
