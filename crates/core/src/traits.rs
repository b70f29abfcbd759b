//! Domain marker traits: entities (identity) and value objects (values).

/// Entity marker + minimal interface.
///
/// Entities have identity and continuity across state changes: two entities
/// with the same id are the same entity, whatever their attributes say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by value: two with the same
/// attributes are interchangeable. To "modify" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
