pub mod event_publishers;
pub mod resume_repo_in_memory;
pub mod static_resume_parser;
pub mod storage_in_memory;

pub use event_publishers::{RecordingEventPublisher, TracingEventPublisher};
pub use resume_repo_in_memory::InMemoryResumeRepository;
pub use static_resume_parser::StaticResumeParser;
pub use storage_in_memory::InMemoryFileStorage;
