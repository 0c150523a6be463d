use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::resume::domain::{Resume, ResumeId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResumeRepositoryError {
    #[error("Resume not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Persistence of résumé aggregates.
///
/// Finders skip soft-deleted résumés (status DELETED). `delete_by_id` removes
/// the row for good.
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Insert or overwrite.
    async fn save(&self, resume: &Resume) -> Result<(), ResumeRepositoryError>;

    async fn find_by_id(&self, id: ResumeId) -> Result<Option<Resume>, ResumeRepositoryError>;

    async fn find_by_user_id(&self, owner: UserId) -> Result<Vec<Resume>, ResumeRepositoryError>;

    async fn find_by_id_and_user_id(
        &self,
        id: ResumeId,
        owner: UserId,
    ) -> Result<Option<Resume>, ResumeRepositoryError>;

    async fn delete_by_id(&self, id: ResumeId) -> Result<(), ResumeRepositoryError>;

    async fn exists_by_id(&self, id: ResumeId) -> Result<bool, ResumeRepositoryError>;

    async fn count_by_user_id(&self, owner: UserId) -> Result<usize, ResumeRepositoryError>;

    async fn find_all(&self) -> Result<Vec<Resume>, ResumeRepositoryError>;
}
