//! Token-branded interior mutability.
//!
//! `GhostCell` is the single cell type of the crate: graph state lives inside
//! one cell and is reached through the owning token.

pub mod ghost_cell;

pub use ghost_cell::GhostCell;
