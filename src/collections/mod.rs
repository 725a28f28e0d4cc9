//! Linear containers used as graph adjacency and traversal scratch space.
//!
//! - `list`: singly linked list with head insertion and identity removal
//! - `stack`: LIFO on top of the list
//! - `queue`: FIFO with tracked head and tail
//!
//! All insertions are fallible and report [`AllocError`](crate::alloc::AllocError).

pub mod list;
pub mod queue;
pub mod stack;

pub use list::{NodeRef, SinglyList};
pub use queue::Queue;
pub use stack::Stack;
