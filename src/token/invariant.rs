use core::marker::PhantomData;

/// A marker type that is invariant in its lifetime parameter `'id`.
///
/// Brands must not be subtyped (shrunk) by the compiler, otherwise two graphs
/// created under different tokens could be unified under one brand and their
/// vertex handles mixed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvariantLifetime<'id>(PhantomData<fn(&'id ()) -> &'id ()>);

impl<'id> InvariantLifetime<'id> {
    /// Creates a new invariant lifetime marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
