// src/infrastructure/events.rs
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    application::{notifications::NotificationDispatcher, ports::events::EventPublisher},
    domain::events::DomainEvent,
};

/// Bounded in-process event queue. The publish side is handed to the
/// comment services; the receive side is drained by a single worker task
/// spawned at startup.
pub struct EventQueue {
    sender: mpsc::Sender<DomainEvent>,
}

impl EventQueue {
    pub fn bounded(capacity: usize) -> (Self, mpsc::Receiver<DomainEvent>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }
}

impl EventPublisher for EventQueue {
    fn publish(&self, event: DomainEvent) {
        // Queue full or worker gone: the event is dropped. Delivery is
        // best-effort and must never stall or fail the request path.
        if let Err(err) = self.sender.try_send(event) {
            tracing::warn!(error = %err, "dropping domain event");
        }
    }
}

/// Worker loop: drains the queue for the process lifetime, one event at a
/// time. Handler failures are contained inside `dispatch`.
pub async fn run_dispatcher(
    mut receiver: mpsc::Receiver<DomainEvent>,
    dispatcher: Arc<NotificationDispatcher>,
) {
    while let Some(event) = receiver.recv().await {
        dispatcher.dispatch(event).await;
    }
    tracing::info!("event queue closed, dispatcher stopping");
}
