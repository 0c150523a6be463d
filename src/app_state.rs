use std::sync::Arc;

use tracing::info;

use crate::resume::adapter::outgoing::{
    InMemoryFileStorage, InMemoryResumeRepository, StaticResumeParser, TracingEventPublisher,
};
use crate::resume::application::ports::incoming::use_cases::{
    DeleteResumeUseCase, FetchResumeUseCase, ParseResumeUseCase, SearchCandidatesUseCase,
    UploadResumeUseCase,
};
use crate::resume::application::ports::outgoing::{
    DomainEventPublisher, FileStoragePort, ParsingResult, ResumeParsingPort, ResumeRepository,
};
use crate::resume::application::services::{
    DeleteResumeService, FetchResumeService, ParseResumeService, SearchCandidatesService,
    UploadResumeService,
};
use crate::resume::domain::ResumePolicy;
use crate::shared::config::{load_env, runtime_env};
use crate::shared::telemetry::init_tracing;

#[derive(Clone)]
pub struct AppState {
    pub upload_resume_use_case: Arc<dyn UploadResumeUseCase + Send + Sync>,
    pub parse_resume_use_case: Arc<dyn ParseResumeUseCase + Send + Sync>,
    pub delete_resume_use_case: Arc<dyn DeleteResumeUseCase + Send + Sync>,
    pub fetch_resume_use_case: Arc<dyn FetchResumeUseCase + Send + Sync>,
    pub search_candidates_use_case: Arc<dyn SearchCandidatesUseCase + Send + Sync>,
    pub policy: ResumePolicy,
}

impl AppState {
    /// Builds every use case over one set of adapters. Adapters are cloned
    /// into each service, so they must share state across clones.
    pub fn wire<R, S, P, E>(
        policy: ResumePolicy,
        repository: R,
        storage: S,
        parser: P,
        publisher: E,
    ) -> Self
    where
        R: ResumeRepository + Clone + 'static,
        S: FileStoragePort + Clone + 'static,
        P: ResumeParsingPort + 'static,
        E: DomainEventPublisher + Clone + 'static,
    {
        Self {
            upload_resume_use_case: Arc::new(UploadResumeService::new(
                storage.clone(),
                repository.clone(),
                publisher.clone(),
            )),
            parse_resume_use_case: Arc::new(ParseResumeService::new(
                repository.clone(),
                parser,
                publisher.clone(),
                policy.clone(),
            )),
            delete_resume_use_case: Arc::new(DeleteResumeService::new(
                repository.clone(),
                storage.clone(),
                publisher,
            )),
            fetch_resume_use_case: Arc::new(FetchResumeService::new(
                repository.clone(),
                storage,
                policy.clone(),
            )),
            search_candidates_use_case: Arc::new(SearchCandidatesService::new(repository)),
            policy,
        }
    }

    /// Process-local wiring. No parser is configured, so every parse attempt fails.
    pub fn in_memory(policy: ResumePolicy) -> Self {
        let storage = InMemoryFileStorage::new(policy.bucket_name.clone());
        Self::wire(
            policy,
            InMemoryResumeRepository::new(),
            storage,
            StaticResumeParser::new(ParsingResult::failure("No resume parser configured")),
            TracingEventPublisher::new(),
        )
    }
}

/// Loads env files, installs tracing and wires the in-memory module.
#[cfg(not(tarpaulin_include))]
pub fn bootstrap() -> anyhow::Result<AppState> {
    let env_file = load_env();
    init_tracing()?;

    let policy = ResumePolicy::from_env();
    info!(
        env = %runtime_env(),
        env_file = env_file.as_deref().unwrap_or("none"),
        bucket = %policy.bucket_name,
        max_parse_retries = policy.max_parse_retries,
        parse_timeout_secs = policy.parse_timeout.as_secs(),
        "Resume module ready"
    );

    Ok(AppState::in_memory(policy))
}
