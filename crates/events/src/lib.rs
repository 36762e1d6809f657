//! `glowdesk-events` — domain event contracts and the pub/sub seam.
//!
//! Events are **facts**: immutable records of state transitions that already
//! happened. Aggregates buffer them; a dispatcher drains the buffer after
//! persistence and hands the events to an [`EventBus`].

pub mod bus;
pub mod event;
pub mod in_memory_bus;
pub mod scoped;

pub use bus::{EventBus, Subscription};
pub use event::DomainEvent;
pub use in_memory_bus::{BusPoisoned, InMemoryEventBus};
pub use scoped::EntityScoped;
