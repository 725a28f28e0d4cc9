//! Scratch worklists that decide sweep order.
//!
//! A FIFO frontier yields breadth-first order, a LIFO frontier depth-first
//! order. Each sweep creates its own frontier and drops it before returning.

use crate::alloc::AllocError;
use crate::collections::{Queue, Stack};

pub(crate) trait Frontier<T>: Default {
    fn push(&mut self, item: T) -> Result<(), AllocError>;
    fn pop(&mut self) -> Option<T>;
}

impl<T> Frontier<T> for Queue<T> {
    #[inline]
    fn push(&mut self, item: T) -> Result<(), AllocError> {
        Queue::push(self, item)
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Queue::pop(self)
    }
}

impl<T> Frontier<T> for Stack<T> {
    #[inline]
    fn push(&mut self, item: T) -> Result<(), AllocError> {
        Stack::push(self, item)
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Stack::pop(self)
    }
}
