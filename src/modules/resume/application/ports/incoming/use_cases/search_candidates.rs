use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;
use crate::resume::application::ports::outgoing::ResumeRepositoryError;
use crate::resume::domain::services::DuplicateMatch;
use crate::resume::domain::{ResumeId, SearchCriteria};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateMatch {
    pub resume_id: ResumeId,
    pub owner: UserId,
    pub candidate_name: Option<String>,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchCandidatesError {
    #[error("Resume not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ResumeRepositoryError> for SearchCandidatesError {
    fn from(error: ResumeRepositoryError) -> Self {
        match error {
            ResumeRepositoryError::NotFound => SearchCandidatesError::NotFound,
            ResumeRepositoryError::DatabaseError(msg) => SearchCandidatesError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait SearchCandidatesUseCase: Send + Sync {
    /// Ranked matches, best first. An empty list is a valid answer.
    async fn search(
        &self,
        criteria: SearchCriteria,
    ) -> Result<Vec<CandidateMatch>, SearchCandidatesError>;

    /// Whether another stored résumé belongs to the same candidate.
    async fn check_duplicate(&self, resume_id: ResumeId) -> Result<bool, SearchCandidatesError>;

    async fn find_duplicates(&self) -> Result<Vec<DuplicateMatch>, SearchCandidatesError>;
}
