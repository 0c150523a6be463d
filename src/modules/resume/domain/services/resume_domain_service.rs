use std::cmp::Ordering;

use serde::Serialize;

use super::search_criteria::{ExperienceQuery, SearchCriteria, SkillQuery};
use crate::resume::domain::resume::{Resume, ResumeId};
use crate::resume::domain::status::ResumeStatus;
use crate::resume::domain::value_objects::ContactInfo;

pub const REQUIRED_SKILL_POINTS: u32 = 20;
pub const PREFERRED_SKILL_POINTS: u32 = 10;
pub const SKILL_YEARS_BONUS: u32 = 5;
pub const EXPERIENCE_MATCH_POINTS: u32 = 10;
pub const MAX_EXTRA_YEAR_POINTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateReason {
    SameEmail,
    SamePhone,
    SameNameAndContact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DuplicateMatch {
    pub first: ResumeId,
    pub second: ResumeId,
    pub reason: DuplicateReason,
}

/// A résumé that survived a combined search, with its matching score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredResume<'a> {
    pub resume: &'a Resume,
    pub score: u32,
}

/// Read-only logic over a pool of résumés already loaded by the caller.
///
/// Nothing here mutates a résumé or fails on an empty result.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeDomainService;

impl ResumeDomainService {
    pub fn new() -> Self {
        Self
    }

    // =========================================================================
    // Duplicate detection
    // =========================================================================

    /// Whether any other résumé in `pool` belongs to the same candidate.
    ///
    /// A target without contact info can't be judged and is never a duplicate.
    pub fn is_duplicate_resume(&self, target: &Resume, pool: &[Resume]) -> bool {
        pool.iter()
            .filter(|other| other.id() != target.id())
            .any(|other| duplicate_reason(target, other).is_some())
    }

    /// Every duplicate pair in the pool, each pair reported once.
    pub fn find_duplicates(&self, pool: &[Resume]) -> Vec<DuplicateMatch> {
        let mut matches = Vec::new();
        for (i, first) in pool.iter().enumerate() {
            for second in &pool[i + 1..] {
                if first.id() == second.id() {
                    continue;
                }
                if let Some(reason) = duplicate_reason(first, second) {
                    matches.push(DuplicateMatch {
                        first: first.id(),
                        second: second.id(),
                        reason,
                    });
                }
            }
        }
        matches
    }

    // =========================================================================
    // Scoring
    // =========================================================================

    pub fn calculate_matching_score(
        &self,
        resume: &Resume,
        required_skills: &[String],
        preferred_skills: &[String],
        min_years_experience: Option<u32>,
    ) -> u32 {
        let mut score = 0;

        for name in required_skills {
            let Some(skill) = resume.find_skill(name) else {
                continue;
            };
            score += REQUIRED_SKILL_POINTS + skill.level().matching_bonus();

            if let (Some(min_years), Some(years)) =
                (min_years_experience, skill.years_of_experience())
            {
                if u32::from(years) >= min_years {
                    score += SKILL_YEARS_BONUS;
                }
            }
        }

        for name in preferred_skills {
            if let Some(skill) = resume.find_skill(name) {
                score += PREFERRED_SKILL_POINTS + skill.level().matching_bonus() / 2;
            }
        }

        if let Some(min_years) = min_years_experience {
            let total_years = resume.total_experience_years();
            if total_years >= min_years {
                score += EXPERIENCE_MATCH_POINTS + (total_years - min_years).min(MAX_EXTRA_YEAR_POINTS);
            }
        }

        score
    }

    // =========================================================================
    // Filters
    // =========================================================================

    /// Résumés where every keyword hits some skill name (substring, any case).
    pub fn search_by_skills<'a>(&self, pool: &'a [Resume], query: &SkillQuery) -> Vec<&'a Resume> {
        pool.iter()
            .filter(|resume| {
                query.keywords.iter().all(|keyword| {
                    resume.skills().iter().any(|skill| {
                        skill.name_contains(keyword)
                            && query
                                .min_level
                                .map_or(true, |min| skill.level().is_at_least(min))
                    })
                })
            })
            .collect()
    }

    /// Résumés with at least one experience entry satisfying every supplied criterion.
    pub fn search_by_experience<'a>(
        &self,
        pool: &'a [Resume],
        query: &ExperienceQuery,
    ) -> Vec<&'a Resume> {
        pool.iter()
            .filter(|resume| {
                resume.experiences().iter().any(|exp| {
                    query
                        .company_keyword
                        .as_deref()
                        .map_or(true, |k| exp.company_contains(k))
                        && query
                            .position_keyword
                            .as_deref()
                            .map_or(true, |k| exp.position_contains(k))
                        && query
                            .min_months
                            .map_or(true, |m| exp.duration_in_months() >= m)
                })
            })
            .collect()
    }

    // =========================================================================
    // Combined search
    // =========================================================================

    /// Parsed résumés that pass every filter, best score first.
    ///
    /// Equal scores: most recently parsed first, then ascending id.
    pub fn complex_search<'a>(
        &self,
        pool: &'a [Resume],
        criteria: &SearchCriteria,
    ) -> Vec<ScoredResume<'a>> {
        let mut results: Vec<ScoredResume<'a>> = pool
            .iter()
            .filter(|resume| resume.status() == ResumeStatus::Parsed)
            .filter(|resume| {
                criteria
                    .minimum_years_of_experience
                    .map_or(true, |min| resume.total_experience_years() >= min)
            })
            .filter(|resume| {
                criteria.major_keyword.as_deref().map_or(true, |keyword| {
                    resume
                        .educations()
                        .iter()
                        .any(|edu| edu.major_contains(keyword))
                })
            })
            .map(|resume| ScoredResume {
                resume,
                score: self.calculate_matching_score(
                    resume,
                    &criteria.required_skills,
                    &criteria.preferred_skills,
                    criteria.minimum_years_of_experience,
                ),
            })
            .filter(|scored| scored.score >= criteria.minimum_score)
            .collect();

        results.sort_by(rank_order);
        results
    }
}

fn rank_order(a: &ScoredResume<'_>, b: &ScoredResume<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.resume.parsed_at().cmp(&a.resume.parsed_at()))
        .then_with(|| a.resume.id().cmp(&b.resume.id()))
}

/// Email first, then phone, then name combined with a shared contact field.
fn duplicate_reason(a: &Resume, b: &Resume) -> Option<DuplicateReason> {
    let (Some(ca), Some(cb)) = (a.contact_info(), b.contact_info()) else {
        return None;
    };

    if ca.shares_email(cb) {
        return Some(DuplicateReason::SameEmail);
    }
    if ca.shares_phone(cb) {
        return Some(DuplicateReason::SamePhone);
    }
    if same_name(a, b) && shares_any_contact(ca, cb) {
        return Some(DuplicateReason::SameNameAndContact);
    }
    None
}

fn same_name(a: &Resume, b: &Resume) -> bool {
    matches!((a.candidate_name(), b.candidate_name()), (Some(x), Some(y)) if x == y)
}

fn shares_any_contact(a: &ContactInfo, b: &ContactInfo) -> bool {
    a.shares_email(b) || a.shares_phone(b)
}
