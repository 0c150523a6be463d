use async_trait::async_trait;
use futures::future::join_all;

use crate::auth::application::domain::entities::UserId;
use crate::resume::application::ports::incoming::use_cases::{
    FetchResumeError, FetchResumeUseCase, ResumeSummary, ResumeWithAccessUrl,
};
use crate::resume::application::ports::outgoing::{FileStoragePort, ResumeRepository};
use crate::resume::domain::{Resume, ResumeId, ResumePolicy};

pub struct FetchResumeService<R, S>
where
    R: ResumeRepository,
    S: FileStoragePort,
{
    repository: R,
    storage: S,
    policy: ResumePolicy,
}

impl<R, S> FetchResumeService<R, S>
where
    R: ResumeRepository,
    S: FileStoragePort,
{
    pub fn new(repository: R, storage: S, policy: ResumePolicy) -> Self {
        Self {
            repository,
            storage,
            policy,
        }
    }

    /// Best effort: a list row without a URL beats a failed list.
    async fn summary_with_url(&self, resume: &Resume) -> ResumeSummary {
        let key = resume.file().storage_key();
        let url = match self
            .storage
            .generate_access_url(key, self.policy.access_url_ttl_minutes)
            .await
        {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(
                    resume_id = %resume.id(),
                    storage_key = %key,
                    error = %e,
                    "Could not sign access url"
                );
                None
            }
        };
        ResumeSummary::from_resume(resume, url)
    }
}

#[async_trait]
impl<R, S> FetchResumeUseCase for FetchResumeService<R, S>
where
    R: ResumeRepository + Send + Sync,
    S: FileStoragePort + Send + Sync,
{
    async fn list_for_user(&self, owner: UserId) -> Result<Vec<ResumeSummary>, FetchResumeError> {
        let resumes = self.repository.find_by_user_id(owner).await?;
        let summaries = join_all(resumes.iter().map(|r| self.summary_with_url(r))).await;
        Ok(summaries)
    }

    async fn get_with_access_url(
        &self,
        owner: UserId,
        resume_id: ResumeId,
    ) -> Result<ResumeWithAccessUrl, FetchResumeError> {
        let resume = self
            .repository
            .find_by_id_and_user_id(resume_id, owner)
            .await?
            .ok_or(FetchResumeError::NotFound)?;

        let ttl = self.policy.access_url_ttl_minutes;
        let access_url = self
            .storage
            .generate_access_url(resume.file().storage_key(), ttl)
            .await?;

        Ok(ResumeWithAccessUrl {
            resume: resume.snapshot(),
            access_url,
            expires_in_minutes: ttl,
        })
    }
}
