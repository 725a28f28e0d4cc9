//! `SinglyList` - a singly linked list with head insertion.
//!
//! Nodes live in a [`NodePool`] and link to each other by slot index, so a
//! list never holds raw pointers and dropping it drops every remaining value.
//!
//! The list is the adjacency container of every graph vertex. Insertion is at
//! the head, therefore iteration yields the most recently added value first.

use core::fmt;
use core::iter::FusedIterator;

use crate::alloc::{AllocError, NodePool};

struct ListNode<T> {
    value: T,
    next: Option<usize>,
}

/// A singly linked list backed by a node pool.
pub struct SinglyList<T> {
    nodes: NodePool<ListNode<T>>,
    head: Option<usize>,
}

/// A read-only cursor onto one node of a [`SinglyList`].
pub struct NodeRef<'a, T> {
    list: &'a SinglyList<T>,
    idx: usize,
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    #[inline]
    fn node(&self) -> &'a ListNode<T> {
        match self.list.nodes.get(self.idx) {
            Some(node) => node,
            None => panic!("list cursor points at released node {}", self.idx),
        }
    }

    /// Returns the node after this one.
    #[inline]
    pub fn next_node(&self) -> Option<NodeRef<'a, T>> {
        self.node().next.map(|idx| NodeRef { list: self.list, idx })
    }

    /// Returns the value stored at this node.
    #[inline]
    pub fn data(&self) -> &'a T {
        &self.node().value
    }
}

impl<T> SinglyList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            nodes: NodePool::new(),
            head: None,
        }
    }

    /// Returns the number of values in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts `value` at the head.
    ///
    /// # Errors
    /// Returns `AllocError` if the node cannot be allocated; the list is unchanged.
    pub fn push_front(&mut self, value: T) -> Result<(), AllocError> {
        let idx = self.nodes.try_alloc(ListNode {
            value,
            next: self.head,
        })?;
        self.head = Some(idx);
        Ok(())
    }

    /// Removes the head value and returns it.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.nodes.take(head)?;
        self.head = node.next;
        Some(node.value)
    }

    /// Returns the head value.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head().map(|node| node.data())
    }

    /// Returns a cursor onto the head node.
    #[inline]
    pub fn head(&self) -> Option<NodeRef<'_, T>> {
        self.head.map(|idx| NodeRef { list: self, idx })
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cursor: self.head(),
            remaining: self.len(),
        }
    }

    /// Drops every value.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
    }
}

impl<T: PartialEq> SinglyList<T> {
    /// Returns `true` if some node holds a value equal to `target`.
    pub fn contains(&self, target: &T) -> bool {
        self.iter().any(|value| value == target)
    }

    /// Unlinks the first node whose value equals `target` and relinks its neighbours.
    ///
    /// Matching uses `T`'s own `PartialEq`; for handle types such as vertex ids
    /// that is identity of the referenced object.
    ///
    /// Returns `false` if no node matches.
    pub fn remove_first(&mut self, target: &T) -> bool {
        let mut prev: Option<usize> = None;
        let mut current = self.head;

        while let Some(idx) = current {
            let Some(node) = self.nodes.get(idx) else {
                break;
            };
            let next = node.next;
            if node.value == *target {
                match prev {
                    None => self.head = next,
                    Some(p) => {
                        if let Some(prev_node) = self.nodes.get_mut(p) {
                            prev_node.next = next;
                        }
                    }
                }
                self.nodes.take(idx);
                return true;
            }
            prev = Some(idx);
            current = next;
        }

        false
    }
}

impl<T> Default for SinglyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Head-to-tail iterator over a [`SinglyList`].
pub struct Iter<'a, T> {
    cursor: Option<NodeRef<'a, T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.next_node();
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a SinglyList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[i32]) -> SinglyList<i32> {
        let mut list = SinglyList::new();
        for &v in values {
            list.push_front(v).unwrap();
        }
        list
    }

    #[test]
    fn push_front_iterates_newest_first() {
        let list = list_of(&[1, 2, 3]);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&3));
    }

    #[test]
    fn cursor_walks_next_and_data() {
        let list = list_of(&[10, 20]);
        let head = list.head().unwrap();
        assert_eq!(*head.data(), 20);
        let second = head.next_node().unwrap();
        assert_eq!(*second.data(), 10);
        assert!(second.next_node().is_none());
    }

    #[test]
    fn remove_first_relinks_head_middle_and_tail() {
        let mut list = list_of(&[1, 2, 3, 4]); // 4 3 2 1
        assert!(list.remove_first(&3));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![4, 2, 1]);
        assert!(list.remove_first(&4));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
        assert!(list.remove_first(&1));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2]);
        assert!(!list.remove_first(&9));
        assert!(list.remove_first(&2));
        assert!(list.is_empty());
        assert!(!list.remove_first(&2));
    }

    #[test]
    fn remove_first_only_takes_one_match() {
        let mut list = list_of(&[5, 5]);
        assert!(list.remove_first(&5));
        assert_eq!(list.len(), 1);
        assert!(list.contains(&5));
    }

    #[test]
    fn pop_front_and_reuse_after_removal() {
        let mut list = list_of(&[1, 2]);
        assert_eq!(list.pop_front(), Some(2));
        list.push_front(7).unwrap();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![7, 1]);
        list.clear();
        assert_eq!(list.pop_front(), None);
        assert_eq!(format!("{list:?}"), "[]");
    }
}
