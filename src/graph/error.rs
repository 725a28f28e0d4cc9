//! Recoverable failures of graph operations.

use thiserror::Error;

use crate::alloc::AllocError;

/// Errors reported by graph operations.
///
/// Structural corruption (a one-sided adjacency link) is not represented here:
/// it means the graph can no longer be trusted and the operation panics instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Inserting data equal to a reachable vertex.
    #[error("a vertex with equal data is already in the graph")]
    AlreadyExists,

    /// An adjacency target did not resolve to a reachable vertex.
    #[error("adjacent vertex #{position} is not in the graph")]
    UnknownAdjacent {
        /// Index into the adjacency slice passed by the caller.
        position: usize,
    },

    /// Deleting data that matches no reachable vertex.
    #[error("no vertex with matching data is reachable")]
    NotFound,

    /// A container or the vertex registry could not grow.
    #[error(transparent)]
    Alloc(#[from] AllocError),
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
