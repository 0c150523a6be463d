use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;
use crate::resume::application::ports::outgoing::{FileStorageError, ResumeRepositoryError};
use crate::resume::domain::{Resume, ResumeId, ResumeSnapshot, ResumeStatus};

/// One row of a user's résumé list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeSummary {
    pub resume_id: ResumeId,
    pub file_name: String,
    pub status: ResumeStatus,
    pub candidate_name: Option<String>,
    pub skill_count: usize,
    pub uploaded_at: DateTime<Utc>,
    pub parsed_at: Option<DateTime<Utc>>,
    /// `None` when the storage could not sign a URL.
    pub access_url: Option<String>,
}

impl ResumeSummary {
    pub fn from_resume(resume: &Resume, access_url: Option<String>) -> Self {
        Self {
            resume_id: resume.id(),
            file_name: resume.file().name().to_string(),
            status: resume.status(),
            candidate_name: resume.candidate_name().map(|n| n.to_string()),
            skill_count: resume.skills().len(),
            uploaded_at: resume.uploaded_at(),
            parsed_at: resume.parsed_at(),
            access_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeWithAccessUrl {
    pub resume: ResumeSnapshot,
    pub access_url: String,
    pub expires_in_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchResumeError {
    #[error("Resume not found")]
    NotFound,

    #[error("Storage service error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ResumeRepositoryError> for FetchResumeError {
    fn from(error: ResumeRepositoryError) -> Self {
        match error {
            ResumeRepositoryError::NotFound => FetchResumeError::NotFound,
            ResumeRepositoryError::DatabaseError(msg) => FetchResumeError::RepositoryError(msg),
        }
    }
}

impl From<FileStorageError> for FetchResumeError {
    fn from(error: FileStorageError) -> Self {
        FetchResumeError::StorageError(error.to_string())
    }
}

#[async_trait]
pub trait FetchResumeUseCase: Send + Sync {
    async fn list_for_user(&self, owner: UserId) -> Result<Vec<ResumeSummary>, FetchResumeError>;

    async fn get_with_access_url(
        &self,
        owner: UserId,
        resume_id: ResumeId,
    ) -> Result<ResumeWithAccessUrl, FetchResumeError>;
}
