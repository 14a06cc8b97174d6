//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A door stays the same door whether it is locked or not; its id is what
/// distinguishes it from an identically-locked neighbour.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
