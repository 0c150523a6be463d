use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::resume::application::ports::outgoing::ResumeRepositoryError;
use crate::resume::domain::{ResumeError, ResumeId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteResumeError {
    #[error("Resume not found")]
    NotFound,

    #[error("Forbidden: only the owner can delete this resume")]
    Forbidden,

    #[error(transparent)]
    Domain(ResumeError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ResumeError> for DeleteResumeError {
    fn from(error: ResumeError) -> Self {
        match error {
            ResumeError::OwnershipViolation { .. } => DeleteResumeError::Forbidden,
            other => DeleteResumeError::Domain(other),
        }
    }
}

impl From<ResumeRepositoryError> for DeleteResumeError {
    fn from(error: ResumeRepositoryError) -> Self {
        match error {
            ResumeRepositoryError::NotFound => DeleteResumeError::NotFound,
            ResumeRepositoryError::DatabaseError(msg) => DeleteResumeError::RepositoryError(msg),
        }
    }
}

/// Soft-deletes a résumé and removes its stored file.
#[async_trait]
pub trait DeleteResumeUseCase: Send + Sync {
    async fn execute(
        &self,
        requested_by: UserId,
        resume_id: ResumeId,
    ) -> Result<(), DeleteResumeError>;
}
