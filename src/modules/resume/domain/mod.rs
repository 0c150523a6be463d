pub mod errors;
pub mod events;
pub mod policies;
pub mod resume;
pub mod services;
pub mod status;
pub mod value_objects;

pub use errors::{ResumeError, ValidationError};
pub use events::{
    EventEnvelope, ResumeDeleted, ResumeEvent, ResumeParsingCompleted, ResumeParsingFailed,
    ResumeParsingStarted, ResumeUploaded,
};
pub use policies::resume_policy::ResumePolicy;
pub use resume::{ParsedProfile, Resume, ResumeId, ResumeSnapshot};
pub use services::{ResumeDomainService, ScoredResume, SearchCriteria};
pub use status::ResumeStatus;
