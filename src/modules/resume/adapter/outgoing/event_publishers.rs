use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::resume::application::ports::outgoing::{DomainEventPublisher, EventPublishError};
use crate::resume::domain::EventEnvelope;

/// Writes every event to the log as JSON. Default outlet when no broker is wired.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventPublisher;

impl TracingEventPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DomainEventPublisher for TracingEventPublisher {
    async fn publish(&self, events: Vec<EventEnvelope>) -> Result<(), EventPublishError> {
        for envelope in events {
            let payload = serde_json::to_string(&envelope.event)
                .map_err(|e| EventPublishError::PublishFailed(e.to_string()))?;
            tracing::info!(
                event_id = %envelope.event_id,
                event_type = envelope.event_type(),
                resume_id = %envelope.aggregate_id,
                occurred_at = %envelope.occurred_at,
                payload = %payload,
                "Domain event"
            );
        }
        Ok(())
    }
}

/// Keeps published events in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingEventPublisher {
    events: Arc<Mutex<Vec<EventEnvelope>>>,
    fail: bool,
}

impl RecordingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects every publish and records nothing.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn published(&self) -> Vec<EventEnvelope> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl DomainEventPublisher for RecordingEventPublisher {
    async fn publish(&self, events: Vec<EventEnvelope>) -> Result<(), EventPublishError> {
        if self.fail {
            return Err(EventPublishError::PublishFailed(
                "publisher is unavailable".to_string(),
            ));
        }
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend(events);
        Ok(())
    }
}
