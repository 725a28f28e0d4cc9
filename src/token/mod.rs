//! `GhostToken` - the permission controller for branded graph state.
//!
//! A token is a zero-sized value whose lifetime parameter `'brand` is unique to
//! the closure passed to [`GhostToken::new`]. Every `GhostCell<'brand, _>` and
//! every `VertexId<'brand>` created inside that closure is tied to it.
//!
//! ## Core invariant (linearity)
//!
//! `GhostToken<'brand>` is **not** `Copy`/`Clone`. Reading branded state
//! requires `&GhostToken<'brand>`, mutating it requires `&mut GhostToken<'brand>`,
//! and Rust guarantees the two never coexist.

/// Invariant lifetime definitions for branding.
pub mod invariant;

pub use invariant::InvariantLifetime;

/// A zero-sized token that controls access to `GhostCell`s of one brand.
#[derive(Debug)]
pub struct GhostToken<'brand>(InvariantLifetime<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a new token and executes a closure with it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ghostgraph::{GhostCell, GhostToken};
    ///
    /// let result = GhostToken::new(|mut token| {
    ///     let cell = GhostCell::new(42);
    ///     *cell.borrow_mut(&mut token) = 100;
    ///     *cell.borrow(&token)
    /// });
    /// assert_eq!(result, 100);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(InvariantLifetime::new()))
    }
}

// `GhostToken` is intentionally NOT `Copy`/`Clone`: a second copy would allow two
// simultaneous `&mut GhostToken<'brand>` borrows and break the exclusivity that
// `GhostCell::borrow_mut` relies on.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_zero_sized() {
        assert_eq!(core::mem::size_of::<GhostToken<'static>>(), 0);
    }

    #[test]
    fn closure_result_is_returned() {
        let value = GhostToken::new(|_token| 7);
        assert_eq!(value, 7);
    }
}
