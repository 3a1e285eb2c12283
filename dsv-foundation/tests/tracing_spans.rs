//! Structure operations with the `tracing` feature enabled

#![cfg(feature = "tracing")]

use dsv_foundation::{
    BinarySearchTree, BoundedArray, BoundedQueue, BoundedStack, DsvResult, Graph,
    SinglyLinkedList,
};

#[test]
fn test_traced_mutations_keep_results() -> DsvResult<()> {
    let mut array = BoundedArray::new(1);
    array.insert(0, 1)?;
    array.insert(1, 2)?;
    assert_eq!(array.capacity(), 2);
    assert_eq!(array.delete(0)?, 1);

    let mut stack = BoundedStack::new(1);
    stack.push(7)?;
    assert!(stack.push(8).is_err());
    assert_eq!(stack.pop()?, 7);

    let mut queue = BoundedQueue::new(2);
    queue.enqueue(1)?;
    assert_eq!(queue.dequeue()?, 1);

    let mut list = SinglyLinkedList::new();
    list.insert_tail(2);
    list.insert_head(1);
    list.insert_at(2, 3)?;
    assert_eq!(list.delete_at(1)?, 2);

    let mut tree = BinarySearchTree::new();
    for value in [50, 30, 70] {
        tree.insert(value)?;
    }
    tree.delete(50)?;
    assert_eq!(tree.inorder(), vec![30, 70]);
    Ok(())
}

#[test]
fn test_traced_traversals() {
    let mut graph = Graph::new(false);
    assert!(graph.add_edge(1, 2));
    assert!(graph.add_edge(1, 3));
    assert!(graph.add_vertex(9));
    assert!(graph.remove_edge(1, 3));
    assert_eq!(graph.bfs(1), vec![1, 2]);
    assert_eq!(graph.dfs(1), vec![1, 2]);
    assert!(graph.remove_vertex(9));
}
