//! Internal graph building blocks.
//!
//! This module is `pub(crate)` so traversal code can share visited bookkeeping
//! without exposing it as part of the public API surface.

pub(crate) mod visited;
