use crate::resume::adapter::outgoing::{
    InMemoryFileStorage, InMemoryResumeRepository, RecordingEventPublisher, StaticResumeParser,
};
use crate::resume::application::ports::outgoing::ParsingResult;
use crate::resume::domain::ResumePolicy;
use crate::AppState;

/// In-memory state plus handles on every adapter behind it.
pub(crate) struct TestApp {
    pub state: AppState,
    pub repository: InMemoryResumeRepository,
    pub storage: InMemoryFileStorage,
    pub parser: StaticResumeParser,
    pub publisher: RecordingEventPublisher,
}

pub(crate) struct TestAppBuilder {
    policy: ResumePolicy,
    parser: StaticResumeParser,
}

impl TestAppBuilder {
    pub(crate) fn new() -> Self {
        Self {
            policy: ResumePolicy::default(),
            parser: StaticResumeParser::new(ParsingResult::failure("nothing scripted")),
        }
    }

    pub(crate) fn policy(mut self, policy: ResumePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub(crate) fn parser(mut self, parser: StaticResumeParser) -> Self {
        self.parser = parser;
        self
    }

    pub(crate) fn build(self) -> TestApp {
        let repository = InMemoryResumeRepository::new();
        let storage = InMemoryFileStorage::new(self.policy.bucket_name.clone());
        let publisher = RecordingEventPublisher::new();

        let state = AppState::wire(
            self.policy,
            repository.clone(),
            storage.clone(),
            self.parser.clone(),
            publisher.clone(),
        );

        TestApp {
            state,
            repository,
            storage,
            parser: self.parser,
            publisher,
        }
    }
}
