mod delete_resume_service;
mod fetch_resume_service;
mod parse_resume_service;
mod search_candidates_service;
mod upload_resume_service;

pub use delete_resume_service::DeleteResumeService;
pub use fetch_resume_service::FetchResumeService;
pub use parse_resume_service::ParseResumeService;
pub use search_candidates_service::SearchCandidatesService;
pub use upload_resume_service::UploadResumeService;

use crate::resume::application::ports::outgoing::DomainEventPublisher;
use crate::resume::domain::EventEnvelope;

/// Hands drained events to the publisher. A failed publish is logged and does
/// not undo the already saved state change.
pub(crate) async fn publish_events<E>(publisher: &E, events: Vec<EventEnvelope>)
where
    E: DomainEventPublisher + ?Sized,
{
    if events.is_empty() {
        return;
    }

    let count = events.len();
    if let Err(e) = publisher.publish(events).await {
        tracing::error!(error = %e, count, "Failed to publish resume events");
    }
}
