use async_trait::async_trait;

use crate::resume::application::ports::incoming::use_cases::{
    CandidateMatch, SearchCandidatesError, SearchCandidatesUseCase,
};
use crate::resume::application::ports::outgoing::ResumeRepository;
use crate::resume::domain::services::DuplicateMatch;
use crate::resume::domain::{ResumeDomainService, ResumeId, SearchCriteria};

/// Loads the whole résumé pool and hands it to the domain service.
pub struct SearchCandidatesService<R>
where
    R: ResumeRepository,
{
    repository: R,
    domain: ResumeDomainService,
}

impl<R> SearchCandidatesService<R>
where
    R: ResumeRepository,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            domain: ResumeDomainService::new(),
        }
    }
}

#[async_trait]
impl<R> SearchCandidatesUseCase for SearchCandidatesService<R>
where
    R: ResumeRepository + Send + Sync,
{
    async fn search(
        &self,
        criteria: SearchCriteria,
    ) -> Result<Vec<CandidateMatch>, SearchCandidatesError> {
        let pool = self.repository.find_all().await?;

        let matches: Vec<CandidateMatch> = self
            .domain
            .complex_search(&pool, &criteria)
            .into_iter()
            .map(|scored| CandidateMatch {
                resume_id: scored.resume.id(),
                owner: scored.resume.owner(),
                candidate_name: scored.resume.candidate_name().map(|n| n.to_string()),
                score: scored.score,
            })
            .collect();

        tracing::debug!(
            pool_size = pool.len(),
            matched = matches.len(),
            "Candidate search finished"
        );
        Ok(matches)
    }

    async fn check_duplicate(&self, resume_id: ResumeId) -> Result<bool, SearchCandidatesError> {
        let target = self
            .repository
            .find_by_id(resume_id)
            .await?
            .ok_or(SearchCandidatesError::NotFound)?;
        let pool = self.repository.find_all().await?;

        Ok(self.domain.is_duplicate_resume(&target, &pool))
    }

    async fn find_duplicates(&self) -> Result<Vec<DuplicateMatch>, SearchCandidatesError> {
        let pool = self.repository.find_all().await?;
        Ok(self.domain.find_duplicates(&pool))
    }
}
