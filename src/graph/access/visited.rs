//! Visited bookkeeping for graph traversals.
//!
//! Two internal representations:
//! - `VisitedFlag`: one flag embedded in each vertex, flipped through `&self`
//!   so a sweep can run under a shared token borrow
//! - `VisitedSet`: a word-packed bitset owned by a single sweep and dropped when
//!   it returns

use core::cell::Cell;

use crate::alloc::AllocError;

const BIT_SHIFT: usize = 6;
const BIT_MASK: usize = 63;

/// A per-vertex visited flag. False at rest.
#[derive(Debug, Default)]
pub(crate) struct VisitedFlag(Cell<bool>);

impl VisitedFlag {
    pub(crate) const fn new() -> Self {
        Self(Cell::new(false))
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self) -> bool {
        self.0.get()
    }

    #[inline(always)]
    pub(crate) fn mark(&self) {
        self.0.set(true);
    }

    #[inline(always)]
    pub(crate) fn unmark(&self) {
        self.0.set(false);
    }

    /// Returns `true` iff this call observed the flag clear and set it.
    #[inline(always)]
    pub(crate) fn try_visit(&self) -> bool {
        !self.0.replace(true)
    }

    /// Returns `true` iff this call observed the flag set and cleared it.
    #[inline(always)]
    pub(crate) fn try_unvisit(&self) -> bool {
        self.0.replace(false)
    }
}

/// A dense, word-packed visited set scoped to one sweep.
pub(crate) struct VisitedSet {
    words: Vec<u64>,
}

impl VisitedSet {
    /// Creates a cleared set able to hold indices `0..bits`.
    pub(crate) fn try_new(bits: usize) -> Result<Self, AllocError> {
        let len = (bits + BIT_MASK) >> BIT_SHIFT;
        let mut words = Vec::new();
        words.try_reserve_exact(len)?;
        words.resize(len, 0);
        Ok(Self { words })
    }

    /// Returns `true` iff this call observed `idx` as not-yet-visited and marks it visited.
    ///
    /// # Panics
    /// Panics if `idx` is outside the range the set was created for.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, idx: usize) -> bool {
        let word = &mut self.words[idx >> BIT_SHIFT];
        let bit = 1u64 << (idx & BIT_MASK);
        let fresh = *word & bit == 0;
        *word |= bit;
        fresh
    }
}
