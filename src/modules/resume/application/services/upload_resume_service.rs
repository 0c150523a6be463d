use async_trait::async_trait;

use super::publish_events;
use crate::resume::application::ports::incoming::use_cases::{
    UploadResumeCommand, UploadResumeError, UploadResumeUseCase, UploadedResume,
};
use crate::resume::application::ports::outgoing::{
    DomainEventPublisher, FileStoragePort, ResumeRepository,
};
use crate::resume::domain::value_objects::{FileDescriptor, StorageKey};
use crate::resume::domain::Resume;

pub struct UploadResumeService<S, R, E>
where
    S: FileStoragePort,
    R: ResumeRepository,
    E: DomainEventPublisher,
{
    storage: S,
    repository: R,
    publisher: E,
}

impl<S, R, E> UploadResumeService<S, R, E>
where
    S: FileStoragePort,
    R: ResumeRepository,
    E: DomainEventPublisher,
{
    pub fn new(storage: S, repository: R, publisher: E) -> Self {
        Self {
            storage,
            repository,
            publisher,
        }
    }
}

#[async_trait]
impl<S, R, E> UploadResumeUseCase for UploadResumeService<S, R, E>
where
    S: FileStoragePort + Send + Sync,
    R: ResumeRepository + Send + Sync,
    E: DomainEventPublisher + Send + Sync,
{
    async fn execute(
        &self,
        command: UploadResumeCommand,
    ) -> Result<UploadedResume, UploadResumeError> {
        let owner = command.owner();
        let file_name = command.file_name().clone();
        let file_type = command.file_type();
        let size = command.size();

        // 1) Store the bytes first; the storage issues the key.
        let stored = self
            .storage
            .upload_file(command.into_bytes(), &file_name, size, file_type, owner)
            .await?;

        // 2) Create the aggregate around the stored object
        let descriptor =
            match FileDescriptor::new(file_name, size, file_type, stored.storage_key.clone()) {
                Ok(descriptor) => descriptor,
                Err(e) => {
                    self.discard_stored_file(&stored.storage_key).await;
                    return Err(UploadResumeError::InvalidFile(e.to_string()));
                }
            };
        let mut resume = Resume::upload(owner, descriptor);

        // 3) Persist; an orphaned object is removed again
        if let Err(e) = self.repository.save(&resume).await {
            tracing::warn!(
                resume_id = %resume.id(),
                storage_key = %stored.storage_key,
                error = %e,
                "Saving uploaded resume failed, removing stored file"
            );
            self.discard_stored_file(&stored.storage_key).await;
            return Err(e.into());
        }

        publish_events(&self.publisher, resume.pull_events()).await;
        tracing::info!(resume_id = %resume.id(), owner = %owner, "Resume uploaded");

        Ok(UploadedResume {
            resume_id: resume.id(),
            storage_key: stored.storage_key,
            access_url: stored.access_url,
        })
    }
}

impl<S, R, E> UploadResumeService<S, R, E>
where
    S: FileStoragePort,
    R: ResumeRepository,
    E: DomainEventPublisher,
{
    async fn discard_stored_file(&self, key: &StorageKey) {
        if let Err(e) = self.storage.delete_file(key).await {
            tracing::error!(storage_key = %key, error = %e, "Failed to remove orphaned file");
        }
    }
}
