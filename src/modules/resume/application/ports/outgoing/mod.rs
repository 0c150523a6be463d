mod event_publisher;
mod file_storage;
mod resume_parsing;
mod resume_repository;

pub use event_publisher::{DomainEventPublisher, EventPublishError};
pub use file_storage::{FileStorageError, FileStoragePort, StoredFile};
pub use resume_parsing::{ParsingError, ParsingResult, ResumeParsingPort};
pub use resume_repository::{ResumeRepository, ResumeRepositoryError};
