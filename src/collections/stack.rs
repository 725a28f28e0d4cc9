//! `Stack` - a LIFO container built on [`SinglyList`].

use super::list::SinglyList;
use crate::alloc::AllocError;

/// A last-in, first-out stack.
#[derive(Debug)]
pub struct Stack<T> {
    items: SinglyList<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self {
            items: SinglyList::new(),
        }
    }

    /// Pushes `value` on top.
    ///
    /// # Errors
    /// Returns `AllocError` if the node cannot be allocated.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), AllocError> {
        self.items.push_front(value)
    }

    /// Pops the top value.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the top value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = Stack::new();
        for i in 0..5 {
            stack.push(i).unwrap();
        }
        assert_eq!(stack.peek(), Some(&4));
        let popped: Vec<_> = core::iter::from_fn(|| stack.pop()).collect();
        assert_eq!(popped, vec![4, 3, 2, 1, 0]);
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }
}
