//! Allocation failure reporting.

use std::collections::TryReserveError;

use thiserror::Error;

/// The error type for allocation failures.
///
/// Every container insertion reserves memory fallibly; when the allocator
/// refuses, this error travels back to the caller instead of aborting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("memory allocation failed")]
pub struct AllocError;

impl From<TryReserveError> for AllocError {
    fn from(_: TryReserveError) -> Self {
        AllocError
    }
}
