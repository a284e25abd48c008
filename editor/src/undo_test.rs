use super::*;
use crate::doc::SpriteBox;

fn set(n: i32) -> BoxSet {
    (0..n).map(|i| SpriteBox::from_edges(i, i, i + 1, i + 1)).collect()
}

#[test]
fn new_stack_is_empty() {
    let stack = UndoStack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
}

#[test]
fn pop_on_empty_is_none() {
    assert!(UndoStack::new().pop().is_none());
}

#[test]
fn pop_returns_most_recent_first() {
    let mut stack = UndoStack::new();
    stack.push(set(1));
    stack.push(set(2));
    stack.push(set(3));
    assert_eq!(stack.pop(), Some(set(3)));
    assert_eq!(stack.pop(), Some(set(2)));
    assert_eq!(stack.pop(), Some(set(1)));
    assert!(stack.is_empty());
}

#[test]
fn clear_drops_everything() {
    let mut stack = UndoStack::new();
    stack.push(set(1));
    stack.push(set(2));
    stack.clear();
    assert!(stack.is_empty());
    assert!(stack.pop().is_none());
}

#[test]
fn stack_is_unbounded() {
    let mut stack = UndoStack::new();
    for i in 0..1000 {
        stack.push(set(i % 4));
    }
    assert_eq!(stack.len(), 1000);
}
