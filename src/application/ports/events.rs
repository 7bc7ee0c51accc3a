// src/application/ports/events.rs
use crate::domain::events::DomainEvent;

/// Publish side of the in-process event queue. Constructed once at startup
/// and injected wherever events originate.
pub trait EventPublisher: Send + Sync {
    /// Fire-and-forget: must return without waiting for consumers, and must
    /// never surface an error to the request path.
    fn publish(&self, event: DomainEvent);
}
