use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;
use crate::resume::application::ports::outgoing::ResumeRepositoryError;
use crate::resume::domain::value_objects::FileType;
use crate::resume::domain::{ResumeError, ResumeId, ResumeStatus};

/// Where a résumé ended up after one parse attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    pub resume_id: ResumeId,
    pub status: ResumeStatus,
    pub retry_count: u32,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseResumeError {
    #[error("Resume not found")]
    NotFound,

    #[error("Parsing retries exhausted ({retry_count}/{max_retries})")]
    RetryLimitExceeded { retry_count: u32, max_retries: u32 },

    #[error("No parser available for file type '{0}'")]
    UnsupportedFileType(FileType),

    #[error(transparent)]
    Domain(#[from] ResumeError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ResumeRepositoryError> for ParseResumeError {
    fn from(error: ResumeRepositoryError) -> Self {
        match error {
            ResumeRepositoryError::NotFound => ParseResumeError::NotFound,
            ResumeRepositoryError::DatabaseError(msg) => ParseResumeError::RepositoryError(msg),
        }
    }
}

/// Drives one parse attempt: start (or retry), call the provider, record the result.
#[async_trait]
pub trait ParseResumeUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        resume_id: ResumeId,
    ) -> Result<ParseOutcome, ParseResumeError>;
}
