use async_trait::async_trait;
use tokio::time::timeout;

use super::publish_events;
use crate::auth::application::domain::entities::UserId;
use crate::resume::application::ports::incoming::use_cases::{
    ParseOutcome, ParseResumeError, ParseResumeUseCase,
};
use crate::resume::application::ports::outgoing::{
    DomainEventPublisher, ParsingResult, ResumeParsingPort, ResumeRepository,
};
use crate::resume::domain::{Resume, ResumeId, ResumePolicy, ResumeStatus};

pub struct ParseResumeService<R, P, E>
where
    R: ResumeRepository,
    P: ResumeParsingPort,
    E: DomainEventPublisher,
{
    repository: R,
    parser: P,
    publisher: E,
    policy: ResumePolicy,
}

impl<R, P, E> ParseResumeService<R, P, E>
where
    R: ResumeRepository,
    P: ResumeParsingPort,
    E: DomainEventPublisher,
{
    pub fn new(repository: R, parser: P, publisher: E, policy: ResumePolicy) -> Self {
        Self {
            repository,
            parser,
            publisher,
            policy,
        }
    }

    /// Moves the résumé into PARSING, honouring the retry ceiling for failed ones.
    fn begin_attempt(&self, resume: &mut Resume) -> Result<(), ParseResumeError> {
        if resume.status() == ResumeStatus::ParseFailed {
            if !resume.can_retry(self.policy.max_parse_retries) {
                return Err(ParseResumeError::RetryLimitExceeded {
                    retry_count: resume.retry_count(),
                    max_retries: self.policy.max_parse_retries,
                });
            }
            resume.request_reparse()?;
        } else {
            resume.start_parsing()?;
        }
        Ok(())
    }

    /// The PARSING row is already stored when the result can't be saved.
    /// Records a failed attempt on a fresh copy so the résumé can be retried or deleted.
    async fn release_stuck_attempt(&self, resume_id: ResumeId, cause: &str) {
        let reloaded = match self.repository.find_by_id(resume_id).await {
            Ok(Some(resume)) if resume.status() == ResumeStatus::Parsing => resume,
            Ok(_) => return,
            Err(e) => {
                tracing::error!(resume_id = %resume_id, error = %e, "Could not reload resume stuck in parsing");
                return;
            }
        };

        let mut resume = reloaded;
        let message = format!("Parse result could not be persisted: {cause}");
        if let Err(e) = resume.fail_parsing(message) {
            tracing::error!(resume_id = %resume_id, error = %e, "Could not release resume stuck in parsing");
            return;
        }

        match self.repository.save(&resume).await {
            Ok(()) => {
                tracing::warn!(resume_id = %resume_id, cause, "Parse result lost, attempt recorded as failed");
                publish_events(&self.publisher, resume.pull_events()).await;
            }
            Err(e) => {
                tracing::error!(resume_id = %resume_id, error = %e, "Resume left in parsing state");
            }
        }
    }

    /// Calls the provider under the configured timeout. Every failure becomes a message.
    async fn run_parser(&self, resume: &Resume) -> ParsingResult {
        let file = resume.file();
        match timeout(
            self.policy.parse_timeout,
            self.parser
                .parse_resume(file.storage_key(), file.file_type()),
        )
        .await
        {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => ParsingResult::failure(e.to_string()),
            Err(_) => ParsingResult::failure(format!(
                "Parsing timed out after {}s",
                self.policy.parse_timeout.as_secs()
            )),
        }
    }
}

#[async_trait]
impl<R, P, E> ParseResumeUseCase for ParseResumeService<R, P, E>
where
    R: ResumeRepository + Send + Sync,
    P: ResumeParsingPort + Send + Sync,
    E: DomainEventPublisher + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        resume_id: ResumeId,
    ) -> Result<ParseOutcome, ParseResumeError> {
        let mut resume = self
            .repository
            .find_by_id_and_user_id(resume_id, owner)
            .await?
            .ok_or(ParseResumeError::NotFound)?;

        let file_type = resume.file().file_type();
        if !self.parser.can_parse(file_type) {
            return Err(ParseResumeError::UnsupportedFileType(file_type));
        }

        // 1) Mark as PARSING and persist before calling out
        self.begin_attempt(&mut resume)?;
        self.repository.save(&resume).await?;
        tracing::info!(
            resume_id = %resume_id,
            attempt = resume.retry_count() + 1,
            "Resume parsing started"
        );

        // 2) Record whatever the provider answered
        match self.run_parser(&resume).await {
            ParsingResult::Success(profile) => {
                resume.complete_parsing(
                    profile.candidate_name,
                    profile.skills,
                    profile.experiences,
                    profile.educations,
                    profile.contact_info,
                )?;
                tracing::info!(
                    resume_id = %resume_id,
                    skills = resume.skills().len(),
                    experiences = resume.experiences().len(),
                    "Resume parsed"
                );
            }
            ParsingResult::Failure { error_message } => {
                tracing::warn!(
                    resume_id = %resume_id,
                    retry_count = resume.retry_count() + 1,
                    error = %error_message,
                    "Resume parsing failed"
                );
                resume.fail_parsing(error_message)?;
            }
        }

        // 3) Persist the result, then let the events go
        if let Err(e) = self.repository.save(&resume).await {
            self.release_stuck_attempt(resume_id, &e.to_string()).await;
            return Err(e.into());
        }
        publish_events(&self.publisher, resume.pull_events()).await;

        Ok(ParseOutcome {
            resume_id,
            status: resume.status(),
            retry_count: resume.retry_count(),
            error_message: resume.parse_error().map(str::to_string),
        })
    }
}
