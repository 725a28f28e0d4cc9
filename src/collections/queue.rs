//! `Queue` - a FIFO container with O(1) push at the tail.
//!
//! Nodes are singly linked by pool index; the queue tracks both ends so that
//! push appends behind the current tail without walking the chain.

use crate::alloc::{AllocError, NodePool};

#[derive(Debug)]
struct QueueNode<T> {
    value: T,
    next: Option<usize>,
}

/// A first-in, first-out queue.
#[derive(Debug)]
pub struct Queue<T> {
    nodes: NodePool<QueueNode<T>>,
    first: Option<usize>,
    last: Option<usize>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            nodes: NodePool::new(),
            first: None,
            last: None,
        }
    }

    /// Appends `value` at the tail.
    ///
    /// # Errors
    /// Returns `AllocError` if the node cannot be allocated; the queue is unchanged.
    pub fn push(&mut self, value: T) -> Result<(), AllocError> {
        let idx = self.nodes.try_alloc(QueueNode { value, next: None })?;
        match self.last.and_then(|last| self.nodes.get_mut(last)) {
            Some(tail) => tail.next = Some(idx),
            None => self.first = Some(idx),
        }
        self.last = Some(idx);
        Ok(())
    }

    /// Removes the head value and returns it.
    pub fn pop(&mut self) -> Option<T> {
        let first = self.first?;
        let node = self.nodes.take(first)?;
        self.first = node.next;
        if self.first.is_none() {
            debug_assert_eq!(self.last, Some(first));
            self.last = None;
        }
        Some(node.value)
    }

    /// Returns the head value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.first
            .and_then(|idx| self.nodes.get(idx))
            .map(|node| &node.value)
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_push_order() {
        let mut queue = Queue::new();
        for i in 0..5 {
            queue.push(i).unwrap();
        }
        assert_eq!(queue.peek(), Some(&0));
        let popped: Vec<_> = core::iter::from_fn(|| queue.pop()).collect();
        assert_eq!(popped, vec![0, 1, 2, 3, 4]);
        assert!(queue.is_empty());
    }

    #[test]
    fn interleaved_push_pop_keeps_both_ends() {
        let mut queue = Queue::new();
        queue.push('a').unwrap();
        assert_eq!(queue.pop(), Some('a'));
        assert_eq!(queue.pop(), None);

        queue.push('b').unwrap();
        queue.push('c').unwrap();
        assert_eq!(queue.pop(), Some('b'));
        queue.push('d').unwrap();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some('c'));
        assert_eq!(queue.pop(), Some('d'));
        assert!(queue.is_empty());
    }
}
