//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier, if one has been assigned.
    ///
    /// Records that have not been persisted yet carry no identity.
    fn id(&self) -> Option<&Self::Id>;

    /// Whether the entity has been assigned an identity by its store.
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}
