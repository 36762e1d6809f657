use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A domain event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **uniquely identified** (for idempotent consumers and audit trails)
/// - designed to be **append-only**
pub trait DomainEvent: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Unique identifier of this event occurrence.
    fn event_id(&self) -> Uuid;

    /// Stable event name/type identifier (e.g. "client.created").
    fn event_type(&self) -> &'static str;

    /// When the event occurred (business time, fixed at construction).
    fn occurred_at(&self) -> DateTime<Utc>;
}
