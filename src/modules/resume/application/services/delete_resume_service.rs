use async_trait::async_trait;

use super::publish_events;
use crate::auth::application::domain::entities::UserId;
use crate::resume::application::ports::incoming::use_cases::{
    DeleteResumeError, DeleteResumeUseCase,
};
use crate::resume::application::ports::outgoing::{
    DomainEventPublisher, FileStoragePort, ResumeRepository,
};
use crate::resume::domain::ResumeId;

pub struct DeleteResumeService<R, S, E>
where
    R: ResumeRepository,
    S: FileStoragePort,
    E: DomainEventPublisher,
{
    repository: R,
    storage: S,
    publisher: E,
}

impl<R, S, E> DeleteResumeService<R, S, E>
where
    R: ResumeRepository,
    S: FileStoragePort,
    E: DomainEventPublisher,
{
    pub fn new(repository: R, storage: S, publisher: E) -> Self {
        Self {
            repository,
            storage,
            publisher,
        }
    }
}

#[async_trait]
impl<R, S, E> DeleteResumeUseCase for DeleteResumeService<R, S, E>
where
    R: ResumeRepository + Send + Sync,
    S: FileStoragePort + Send + Sync,
    E: DomainEventPublisher + Send + Sync,
{
    async fn execute(
        &self,
        requested_by: UserId,
        resume_id: ResumeId,
    ) -> Result<(), DeleteResumeError> {
        let mut resume = self
            .repository
            .find_by_id(resume_id)
            .await?
            .ok_or(DeleteResumeError::NotFound)?;

        resume.delete(requested_by)?;
        self.repository.save(&resume).await?;

        // The record is gone either way; a lingering object only gets logged
        let key = resume.file().storage_key();
        if let Err(e) = self.storage.delete_file(key).await {
            tracing::warn!(
                resume_id = %resume_id,
                storage_key = %key,
                error = %e,
                "Failed to delete stored resume file"
            );
        }

        publish_events(&self.publisher, resume.pull_events()).await;
        tracing::info!(resume_id = %resume_id, deleted_by = %requested_by, "Resume deleted");
        Ok(())
    }
}
