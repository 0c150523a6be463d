use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::resume::domain::resume::ResumeId;
use crate::resume::domain::value_objects::{
    CandidateName, FileDescriptor, FileType, StorageKey,
};

// ============================================================================
// Payloads
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeUploaded {
    pub resume_id: ResumeId,
    pub owner: UserId,
    pub file: FileDescriptor,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeParsingStarted {
    pub resume_id: ResumeId,
    pub storage_key: StorageKey,
    pub file_type: FileType,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeParsingCompleted {
    pub resume_id: ResumeId,
    pub candidate_name: Option<CandidateName>,
    pub skill_count: usize,
    pub experience_count: usize,
    pub parsed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeParsingFailed {
    pub resume_id: ResumeId,
    pub error_message: String,
    pub retry_count: u32,
    pub failed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeDeleted {
    pub resume_id: ResumeId,
    pub deleted_by: UserId,
    pub storage_key: StorageKey,
    pub deleted_at: DateTime<Utc>,
}

// ============================================================================
// Event + envelope
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum ResumeEvent {
    Uploaded(ResumeUploaded),
    ParsingStarted(ResumeParsingStarted),
    ParsingCompleted(ResumeParsingCompleted),
    ParsingFailed(ResumeParsingFailed),
    Deleted(ResumeDeleted),
}

impl ResumeEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            ResumeEvent::Uploaded(_) => "resume.uploaded",
            ResumeEvent::ParsingStarted(_) => "resume.parsing_started",
            ResumeEvent::ParsingCompleted(_) => "resume.parsing_completed",
            ResumeEvent::ParsingFailed(_) => "resume.parsing_failed",
            ResumeEvent::Deleted(_) => "resume.deleted",
        }
    }

    pub fn resume_id(&self) -> ResumeId {
        match self {
            ResumeEvent::Uploaded(e) => e.resume_id,
            ResumeEvent::ParsingStarted(e) => e.resume_id,
            ResumeEvent::ParsingCompleted(e) => e.resume_id,
            ResumeEvent::ParsingFailed(e) => e.resume_id,
            ResumeEvent::Deleted(e) => e.resume_id,
        }
    }
}

/// What leaves the aggregate. `occurred_at` is when the envelope was recorded,
/// independent of the business timestamp inside the payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventEnvelope {
    pub event_id: Uuid,
    pub aggregate_id: ResumeId,
    pub occurred_at: DateTime<Utc>,
    pub event: ResumeEvent,
}

impl EventEnvelope {
    pub fn wrap(event: ResumeEvent) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            aggregate_id: event.resume_id(),
            occurred_at: Utc::now(),
            event,
        }
    }

    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

impl From<ResumeEvent> for EventEnvelope {
    fn from(event: ResumeEvent) -> Self {
        Self::wrap(event)
    }
}
