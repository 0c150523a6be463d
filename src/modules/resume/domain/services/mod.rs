mod resume_domain_service;
mod search_criteria;

pub use resume_domain_service::{
    DuplicateMatch, DuplicateReason, ResumeDomainService, ScoredResume, EXPERIENCE_MATCH_POINTS,
    MAX_EXTRA_YEAR_POINTS, PREFERRED_SKILL_POINTS, REQUIRED_SKILL_POINTS, SKILL_YEARS_BONUS,
};
pub use search_criteria::{ExperienceQuery, SearchCriteria, SkillQuery};
