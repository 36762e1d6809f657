//! Aggregate root trait for state-stored domain models with buffered events.

use crate::entity::Entity;

/// Aggregate root marker + minimal interface.
///
/// An aggregate owns a buffer of uncommitted domain events describing the
/// state transitions it has gone through since it was created or loaded.
/// The buffer is append-only from the aggregate's point of view; an external
/// dispatcher drains it (after persistence) and publishes the events.
///
/// Recording an event is the only operation that advances `updated_at`:
/// a mutation that changes nothing records nothing and leaves the timestamp
/// alone.
pub trait AggregateRoot: Entity {
    /// Domain event type emitted by this aggregate.
    type Event: Clone + core::fmt::Debug;

    /// Read-only view of the uncommitted events, in recording order.
    fn domain_events(&self) -> &[Self::Event];

    /// Drain the uncommitted events for dispatch, leaving the buffer empty.
    fn take_domain_events(&mut self) -> Vec<Self::Event>;
}
