//! Entity trait: identity + continuity across state changes.

/// A domain object with a stable identity.
///
/// Two entities are "the same" when their ids are equal, even if every other
/// field differs (e.g. a product before and after a full replace).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
