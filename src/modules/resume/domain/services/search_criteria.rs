use serde::{Deserialize, Serialize};

use crate::resume::domain::value_objects::SkillLevel;

/// Input of a combined candidate search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub minimum_years_of_experience: Option<u32>,
    pub major_keyword: Option<String>,
    pub minimum_score: u32,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_skills.extend(skills.into_iter().map(Into::into));
        self
    }

    pub fn prefer<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_skills
            .extend(skills.into_iter().map(Into::into));
        self
    }

    pub fn min_years(mut self, years: u32) -> Self {
        self.minimum_years_of_experience = Some(years);
        self
    }

    pub fn major(mut self, keyword: impl Into<String>) -> Self {
        self.major_keyword = Some(keyword.into()).filter(|k: &String| !k.trim().is_empty());
        self
    }

    pub fn min_score(mut self, score: u32) -> Self {
        self.minimum_score = score;
        self
    }
}

/// Keyword filter for [`super::ResumeDomainService::search_by_skills`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillQuery {
    pub keywords: Vec<String>,
    pub min_level: Option<SkillLevel>,
}

/// Filter for [`super::ResumeDomainService::search_by_experience`]. `None` matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceQuery {
    pub company_keyword: Option<String>,
    pub position_keyword: Option<String>,
    pub min_months: Option<u32>,
}
