//! `GhostCell` - safe interior mutability via branded tokens.
//!
//! ## Safety invariant
//!
//! For a fixed brand `'brand`, the only safe method that produces `&mut T` from
//! `&GhostCell` requires `&mut GhostToken<'brand>`. Since the token is linear,
//! safe code cannot hold two overlapping mutable borrows of the same cell, nor a
//! mutable borrow alongside a shared one.

use core::cell::UnsafeCell;

use crate::token::InvariantLifetime;
use crate::GhostToken;

/// A branded cell that can only be accessed using a token of the same brand.
pub struct GhostCell<'brand, T: ?Sized> {
    _brand: InvariantLifetime<'brand>,
    value: UnsafeCell<T>,
}

impl<'brand, T> GhostCell<'brand, T> {
    /// Creates a new `GhostCell`.
    pub const fn new(value: T) -> Self {
        Self {
            _brand: InvariantLifetime::new(),
            value: UnsafeCell::new(value),
        }
    }

    /// Consumes the cell and returns the contained value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

impl<'brand, T: ?Sized> GhostCell<'brand, T> {
    /// Borrows the cell immutably.
    #[inline(always)]
    pub fn borrow<'a>(&'a self, _token: &'a GhostToken<'brand>) -> &'a T {
        // SAFETY: safe code cannot obtain `&mut T` without `&mut GhostToken<'brand>`,
        // which cannot coexist with the shared token borrow held here.
        unsafe { &*self.value.get() }
    }

    /// Borrows the cell mutably.
    #[inline(always)]
    pub fn borrow_mut<'a>(&'a self, _token: &'a mut GhostToken<'brand>) -> &'a mut T {
        // SAFETY: caller proves exclusivity via `&mut GhostToken<'brand>`.
        unsafe { &mut *self.value.get() }
    }

    /// Returns a mutable reference without a token.
    ///
    /// This requires exclusive access to the cell itself (`&mut self`).
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }
}

impl<'brand, T: Default> Default for GhostCell<'brand, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

// SAFETY: sending the cell by value does not grant access to the interior;
// access still requires the branded token.
unsafe impl<'brand, T: ?Sized + Send> Send for GhostCell<'brand, T> {}

// SAFETY: the only safe shared access yields `&T` (requires `T: Sync`), and
// `&mut T` requires the unique `&mut GhostToken<'brand>`.
unsafe impl<'brand, T: ?Sized + Send + Sync> Sync for GhostCell<'brand, T> {}
