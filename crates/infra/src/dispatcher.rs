//! Bridges aggregates to the event bus.

use glowdesk_core::AggregateRoot;
use glowdesk_events::EventBus;

/// Drain an aggregate's buffered events and publish them in order.
/// Returns how many events were published. On a publish failure the
/// remaining events are dropped with the rest of the drained batch.
pub fn dispatch_events<A, B>(aggregate: &mut A, bus: &B) -> Result<usize, B::Error>
where
    A: AggregateRoot,
    B: EventBus<A::Event>,
{
    let events = aggregate.take_domain_events();
    let count = events.len();
    for event in events {
        bus.publish(event)?;
    }
    Ok(count)
}
