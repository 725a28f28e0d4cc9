//! # `ghostgraph` - token-gated containers and an undirected graph
//!
//! A small toolkit of linear containers (singly linked list, stack, queue) and
//! an undirected graph built on top of them, with breadth-first and depth-first
//! traversal and search.
//!
//! ## Architecture
//!
//! 1. **Ghost Tokens** (`GhostToken<'brand>`): zero-sized linear capabilities.
//!    Every graph created inside [`GhostToken::new`] is branded with that
//!    closure's lifetime, and so are its [`VertexId`] handles.
//! 2. **Ghost Cells** (`GhostCell<'brand, T>`): graph state sits in one cell.
//!    Reads need `&GhostToken`, mutations need `&mut GhostToken`.
//! 3. **Pool-backed nodes** (`NodePool<T>`): list, stack and queue nodes, and
//!    graph vertices, live in slot pools and link by index. Growth is fallible
//!    and reported as [`AllocError`].
//!
//! ## Example
//!
//! ```rust
//! use ghostgraph::{GhostToken, UndirectedGraph};
//!
//! GhostToken::new(|mut token| {
//!     let graph = UndirectedGraph::new(|_: &&str| {}, |a: &&str, b: &&str| a == b);
//!
//!     graph.insert_vertex(&mut token, "Palo Alto", &[]).unwrap();
//!     graph.insert_vertex(&mut token, "Mountain View", &["Palo Alto"]).unwrap();
//!     graph
//!         .insert_vertex(&mut token, "Sunnyvale", &["Palo Alto", "Mountain View"])
//!         .unwrap();
//!
//!     let found = graph.depth_first_search(&token, &"Sunnyvale").unwrap();
//!     assert_eq!(graph.get(&token, found.unwrap()), Some(&"Sunnyvale"));
//!     assert!(graph.is_at_rest(&token));
//! });
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod alloc;
pub mod cell;
pub mod collections;
pub mod graph;
pub mod token;

pub use alloc::{AllocError, NodePool};
pub use cell::GhostCell;
pub use collections::{NodeRef, Queue, SinglyList, Stack};
pub use graph::{
    DestroyStats, GraphConfig, GraphError, GraphResult, SearchOrder, UndirectedGraph, VertexId,
    VisitedStrategy,
};
pub use token::GhostToken;

// Compile-time layout checks.
const _: () = {
    use core::mem;

    // Tokens are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);

    // Vertex handles are an index plus a generation.
    assert!(mem::size_of::<VertexId<'static>>() == mem::size_of::<(usize, u32)>());

    // `GhostCell` adds nothing over the wrapped value.
    assert!(mem::size_of::<GhostCell<'static, u64>>() == mem::size_of::<u64>());
};
