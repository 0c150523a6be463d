use async_trait::async_trait;

use crate::resume::domain::EventEnvelope;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventPublishError {
    #[error("Event publish failed: {0}")]
    PublishFailed(String),
}

/// Outlet for events drained from aggregates after they were saved.
#[async_trait]
pub trait DomainEventPublisher: Send + Sync {
    async fn publish(&self, events: Vec<EventEnvelope>) -> Result<(), EventPublishError>;
}
