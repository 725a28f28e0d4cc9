//! Undirected graph with breadth-first and depth-first traversal and search.
//!
//! - `undirected`: the graph, its vertex handles and its sweeps
//! - `config`: visited bookkeeping and lookup order
//! - `error`: recoverable failures of graph operations

pub mod config;
pub mod error;
pub mod undirected;
pub(crate) mod access;

pub use config::{GraphConfig, SearchOrder, VisitedStrategy};
pub use error::{GraphError, GraphResult};
pub use undirected::{DestroyStats, UndirectedGraph, VertexId};
