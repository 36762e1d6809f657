//! Entity trait: identity + continuity across state changes.

use chrono::{DateTime, Utc};

/// Entity marker + minimal interface.
///
/// Entities are equal when their identifiers are equal, regardless of the
/// rest of their state. Implementations should implement `PartialEq`
/// accordingly (compare ids only).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// When the entity was first constructed.
    fn created_at(&self) -> DateTime<Utc>;

    /// When the entity last changed. Implementations advance this on
    /// mutation (for aggregates, recording a domain event is the mutation).
    fn updated_at(&self) -> DateTime<Utc>;
}
