//! `NodePool` - an index-addressed object pool with free-list reuse.
//!
//! Linked structures (lists, stacks, queues, graph vertices) allocate their
//! nodes here and link them by slot index instead of by pointer. Freed slots
//! are threaded onto a free list and reused before the backing vector grows.
//!
//! # Features
//! - **Fallible growth**: new slots are reserved with `Vec::try_reserve`, so
//!   allocator exhaustion is reported as [`AllocError`].
//! - **Free List Reuse**: freed slots are reused in O(1).
//! - **Stable indices**: a live value never moves to another index.
//! - **Generations**: every reuse of a slot bumps its generation, so a stored
//!   `(index, generation)` pair goes stale once its value is taken.

use super::AllocError;

#[derive(Debug)]
enum SlotState<T> {
    Occupied(T),
    /// Next free slot index.
    Free(Option<usize>),
}

/// A slot with generation.
#[derive(Debug)]
struct PoolSlot<T> {
    generation: u32,
    state: SlotState<T>,
}

/// An index-addressed pool of `T` values.
#[derive(Debug)]
pub struct NodePool<T> {
    slots: Vec<PoolSlot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> NodePool<T> {
    /// Creates a new empty pool.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Creates an empty pool with room for `capacity` values.
    ///
    /// # Errors
    /// Returns `AllocError` if the backing storage cannot be reserved.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        Ok(Self {
            slots,
            free_head: None,
            len: 0,
        })
    }

    /// Stores `value` in the pool, returning its index.
    ///
    /// # Errors
    /// Returns `AllocError` if a new slot is needed and cannot be reserved.
    /// The pool is unchanged in that case and `value` is dropped.
    #[inline]
    pub fn try_alloc(&mut self, value: T) -> Result<usize, AllocError> {
        self.try_alloc_versioned(value).map(|(idx, _)| idx)
    }

    /// Stores `value` in the pool, returning its index and generation.
    ///
    /// # Errors
    /// Same as [`try_alloc`](Self::try_alloc).
    pub fn try_alloc_versioned(&mut self, value: T) -> Result<(usize, u32), AllocError> {
        fault::check()?;

        if let Some(idx) = self.free_head {
            let slot = &mut self.slots[idx];
            let next_free = match slot.state {
                SlotState::Free(next) => next,
                SlotState::Occupied(_) => panic!("free list points at occupied slot {idx}"),
            };
            slot.generation = slot.generation.wrapping_add(1);
            slot.state = SlotState::Occupied(value);
            let generation = slot.generation;
            self.free_head = next_free;
            self.len += 1;
            return Ok((idx, generation));
        }

        self.slots.try_reserve(1)?;
        let idx = self.slots.len();
        self.slots.push(PoolSlot {
            generation: 0,
            state: SlotState::Occupied(value),
        });
        self.len += 1;
        Ok((idx, 0))
    }

    /// Removes and returns the value at `index`.
    ///
    /// Returns `None` if the slot is free or out of bounds.
    pub fn take(&mut self, index: usize) -> Option<T> {
        let slot = self.slots.get_mut(index)?;
        if matches!(slot.state, SlotState::Free(_)) {
            return None;
        }
        let SlotState::Occupied(value) =
            core::mem::replace(&mut slot.state, SlotState::Free(self.free_head))
        else {
            unreachable!("slot {index} checked occupied");
        };
        self.free_head = Some(index);
        self.len -= 1;
        Some(value)
    }

    /// Returns a shared reference to the value at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        match &self.slots.get(index)?.state {
            SlotState::Occupied(value) => Some(value),
            SlotState::Free(_) => None,
        }
    }

    /// Returns a mutable reference to the value at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match &mut self.slots.get_mut(index)?.state {
            SlotState::Occupied(value) => Some(value),
            SlotState::Free(_) => None,
        }
    }

    /// Returns the generation of the live value at `index`.
    #[inline]
    pub fn generation(&self, index: usize) -> Option<u32> {
        let slot = self.slots.get(index)?;
        match slot.state {
            SlotState::Occupied(_) => Some(slot.generation),
            SlotState::Free(_) => None,
        }
    }

    /// Returns the value at `index` only if it was stored as `generation`.
    #[inline]
    pub fn get_versioned(&self, index: usize, generation: u32) -> Option<&T> {
        let slot = self.slots.get(index)?;
        match &slot.state {
            SlotState::Occupied(value) if slot.generation == generation => Some(value),
            _ => None,
        }
    }

    /// Mutable counterpart of [`get_versioned`](Self::get_versioned).
    #[inline]
    pub fn get_versioned_mut(&mut self, index: usize, generation: u32) -> Option<&mut T> {
        let slot = self.slots.get_mut(index)?;
        match &mut slot.state {
            SlotState::Occupied(value) if slot.generation == generation => Some(value),
            _ => None,
        }
    }

    /// Returns `true` if `index` holds a live value.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Returns the number of live values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no value is live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots, live or free.
    ///
    /// Every live index is strictly below this bound.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the lowest live index, if any.
    pub fn first_index(&self) -> Option<usize> {
        self.iter().next().map(|(idx, _)| idx)
    }

    /// Iterates over live values with their indices, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| match &slot.state {
                SlotState::Occupied(value) => Some((idx, value)),
                SlotState::Free(_) => None,
            })
    }

    /// Drops every live value and releases all slots.
    ///
    /// Generations restart, so indices handed out before the call must not be
    /// checked against the cleared pool.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<T> Default for NodePool<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(test))]
mod fault {
    use super::AllocError;

    #[inline(always)]
    pub(super) fn check() -> Result<(), AllocError> {
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_take_and_reuse() {
        let mut pool = NodePool::new();
        let a = pool.try_alloc("a").unwrap();
        let b = pool.try_alloc("b").unwrap();
        assert_eq!((a, b), (0, 1));
        assert_eq!(pool.len(), 2);

        assert_eq!(pool.take(a), Some("a"));
        assert_eq!(pool.take(a), None);
        assert!(!pool.contains(a));
        assert_eq!(pool.len(), 1);

        // Freed slot is reused before the pool grows.
        let c = pool.try_alloc("c").unwrap();
        assert_eq!(c, a);
        assert_eq!(pool.slot_count(), 2);
        assert_eq!(pool.get(c), Some(&"c"));
    }

    #[test]
    fn free_list_is_lifo() {
        let mut pool = NodePool::new();
        for i in 0..4 {
            pool.try_alloc(i).unwrap();
        }
        pool.take(1);
        pool.take(3);
        assert_eq!(pool.try_alloc(30).unwrap(), 3);
        assert_eq!(pool.try_alloc(10).unwrap(), 1);
        assert_eq!(pool.try_alloc(4).unwrap(), 4);
    }

    #[test]
    fn iter_skips_free_slots() {
        let mut pool = NodePool::new();
        for i in 0..5 {
            pool.try_alloc(i * 10).unwrap();
        }
        pool.take(0);
        pool.take(2);
        let live: Vec<_> = pool.iter().map(|(i, v)| (i, *v)).collect();
        assert_eq!(live, vec![(1, 10), (3, 30), (4, 40)]);
        assert_eq!(pool.first_index(), Some(1));
    }

    #[test]
    fn get_mut_and_out_of_bounds() {
        let mut pool = NodePool::new();
        let idx = pool.try_alloc(1).unwrap();
        *pool.get_mut(idx).unwrap() += 41;
        assert_eq!(pool.get(idx), Some(&42));
        assert_eq!(pool.get(99), None);
        assert_eq!(pool.take(99), None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut pool = NodePool::try_with_capacity(8).unwrap();
        pool.try_alloc(1).unwrap();
        pool.try_alloc(2).unwrap();
        pool.clear();
        assert!(pool.is_empty());
        assert_eq!(pool.slot_count(), 0);
        assert_eq!(pool.try_alloc(3).unwrap(), 0);
    }

    #[test]
    fn reused_slot_gets_a_new_generation() {
        let mut pool = NodePool::new();
        let idx = pool.try_alloc("old").unwrap();
        let old = pool.generation(idx).unwrap();
        pool.take(idx);
        assert_eq!(pool.generation(idx), None);

        assert_eq!(pool.try_alloc("new").unwrap(), idx);
        let new = pool.generation(idx).unwrap();
        assert_ne!(old, new);
        assert_eq!(pool.get_versioned(idx, old), None);
        assert_eq!(pool.get_versioned(idx, new), Some(&"new"));
        *pool.get_versioned_mut(idx, new).unwrap() = "newer";
        assert!(pool.get_versioned_mut(idx, old).is_none());
        assert_eq!(pool.get(idx), Some(&"newer"));
    }

    #[test]
    fn fault_budget_fails_then_recovers() {
        let mut pool = NodePool::new();
        {
            let _guard = fault::fail_after(2);
            assert!(pool.try_alloc(1).is_ok());
            assert!(pool.try_alloc(2).is_ok());
            assert_eq!(pool.try_alloc(3), Err(AllocError));
            assert_eq!(pool.len(), 2);
        }
        assert!(pool.try_alloc(3).is_ok());
    }
}
