mod delete_resume;
mod fetch_resume;
mod parse_resume;
mod search_candidates;
mod upload_resume;

pub use delete_resume::{DeleteResumeError, DeleteResumeUseCase};
pub use fetch_resume::{
    FetchResumeError, FetchResumeUseCase, ResumeSummary, ResumeWithAccessUrl,
};
pub use parse_resume::{ParseOutcome, ParseResumeError, ParseResumeUseCase};
pub use search_candidates::{CandidateMatch, SearchCandidatesError, SearchCandidatesUseCase};
pub use upload_resume::{
    UploadResumeCommand, UploadResumeCommandBuilder, UploadResumeCommandError,
    UploadResumeError, UploadResumeUseCase, UploadedResume,
};
