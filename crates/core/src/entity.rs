//! Entity trait: identity + continuity across state changes.
//!
//! Products, orders and order items are all entities: their fields may be
//! overwritten, but their id is assigned once by the store and never changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
