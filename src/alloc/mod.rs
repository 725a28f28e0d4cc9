//! Node storage shared by the linked containers and the graph's vertex registry.

pub mod error;
pub mod pool;

pub use error::AllocError;
pub use pool::NodePool;
