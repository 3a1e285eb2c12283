//! Integration tests for the dsv-foundation collections
//!
//! Walks each structure through a complete scenario using only the public
//! API, the way a front end drives it.

use dsv_foundation::{
    BinarySearchTree, BoundedArray, BoundedCapacity, BoundedQueue, BoundedStack, DataStructure,
    ErrorKind, Graph, SinglyLinkedList,
};

type TestResult = dsv_foundation::DsvResult<()>;

#[test]
fn bst_delete_uses_in_order_successor() -> TestResult {
    let mut tree = BinarySearchTree::new();
    for key in [5, 3, 8, 1, 4] {
        tree.insert(key)?;
    }
    assert_eq!(tree.inorder(), vec![1, 3, 4, 5, 8]);

    tree.delete(3)?;
    assert_eq!(tree.inorder(), vec![1, 4, 5, 8]);
    assert_eq!(tree.preorder(), vec![5, 4, 1, 8]);
    Ok(())
}

#[test]
fn stack_overflow_then_drain() -> TestResult {
    let mut stack = BoundedStack::new(3);
    for value in [1, 2, 3] {
        stack.push(value)?;
    }

    assert_eq!(stack.push(4).map_err(|e| e.kind()), Err(ErrorKind::Overflow));
    assert_eq!(stack.pop()?, 3);
    assert_eq!(stack.pop()?, 2);
    assert_eq!(stack.pop()?, 1);
    assert_eq!(stack.pop().map_err(|e| e.kind()), Err(ErrorKind::Underflow));
    Ok(())
}

#[test]
fn queue_dequeue_then_peek() -> TestResult {
    let mut queue = BoundedQueue::new(10);
    for value in [10, 20, 30] {
        queue.enqueue(value)?;
    }

    assert_eq!(queue.dequeue()?, 10);
    assert_eq!(queue.peek()?, 20);
    assert_eq!(queue.to_vec(), vec![20, 30]);
    Ok(())
}

#[test]
fn array_resizes_when_full() -> TestResult {
    let mut array = BoundedArray::new(2);
    array.insert(0, 1)?;
    array.insert(1, 2)?;
    assert!(array.is_full());

    array.insert(2, 3)?;
    assert_eq!(array.capacity(), 4);
    assert_eq!(array.search(2), Some(1));
    Ok(())
}

#[test]
fn graph_bfs_follows_insertion_order() {
    let mut graph = Graph::new(false);
    graph.add_edge(1, 2);
    graph.add_edge(2, 3);
    graph.add_edge(1, 4);

    assert_eq!(graph.bfs(1), vec![1, 2, 4, 3]);
    assert_eq!(graph.dfs(1), vec![1, 2, 3, 4]);
    assert_eq!(graph.bfs(99), Vec::<i32>::new());
}

#[test]
fn graph_isolated_vertex_visits_itself() {
    let mut graph = Graph::new(false);
    graph.add_vertex(42);

    assert_eq!(graph.bfs(42), vec![42]);
    assert_eq!(graph.dfs(42), vec![42]);
}

#[test]
fn list_head_and_tail_inserts() -> TestResult {
    let mut list = SinglyLinkedList::new();
    list.insert_head(1);
    list.insert_head(2);
    list.insert_tail(3);
    assert_eq!(list.to_vec(), vec![2, 1, 3]);

    assert_eq!(list.delete_head()?, 2);
    assert_eq!(list.to_vec(), vec![1, 3]);
    Ok(())
}

#[test]
fn data_structure_trait_reports_contents() -> TestResult {
    let mut stack = BoundedStack::new(4);
    stack.push(7)?;
    stack.push(9)?;

    let mut tree = BinarySearchTree::new();
    tree.insert(9)?;
    tree.insert(7)?;

    let mut graph = Graph::new(true);
    graph.add_edge(3, 1);

    let structures: [&dyn DataStructure; 3] = [&stack, &tree, &graph];
    let names: Vec<&str> = structures.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["stack", "bst", "graph"]);

    assert_eq!(stack.contents(), vec![7, 9]);
    assert_eq!(tree.contents(), vec![7, 9]);
    assert_eq!(graph.contents(), vec![1, 3]);
    Ok(())
}

#[test]
fn clear_through_trait() -> TestResult {
    let mut queue = BoundedQueue::new(2);
    queue.enqueue(1)?;

    let structure: &mut dyn DataStructure = &mut queue;
    structure.clear();
    assert!(structure.is_empty());
    assert_eq!(queue.capacity(), 2);
    Ok(())
}
