use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::{bounded_text, contains_ignore_case, eq_ignore_case};
use crate::resume::domain::errors::ValidationError;

const MAX_YEARS: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub const fn rank(self) -> u8 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
            SkillLevel::Expert => 4,
        }
    }

    /// Bonus awarded when the skill satisfies a required keyword.
    pub const fn matching_bonus(self) -> u32 {
        match self {
            SkillLevel::Beginner => 0,
            SkillLevel::Intermediate => 1,
            SkillLevel::Advanced => 3,
            SkillLevel::Expert => 5,
        }
    }

    pub const fn is_at_least(self, minimum: SkillLevel) -> bool {
        self.rank() >= minimum.rank()
    }

    pub const fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "BEGINNER",
            SkillLevel::Intermediate => "INTERMEDIATE",
            SkillLevel::Advanced => "ADVANCED",
            SkillLevel::Expert => "EXPERT",
        }
    }
}

impl PartialOrd for SkillLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SkillLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkillLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        SkillLevel::ALL
            .into_iter()
            .find(|level| level.label() == upper)
            .ok_or(ValidationError::OutOfRange {
                field: "skill_level",
                reason: format!("unknown level '{}'", s.trim()),
            })
    }
}

/// A named skill. Two skills with the same name (ignoring case) are the same skill.
#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    name: String,
    level: SkillLevel,
    years_of_experience: Option<u8>,
}

impl Skill {
    pub fn try_new(
        name: impl AsRef<str>,
        level: SkillLevel,
        years_of_experience: Option<u8>,
    ) -> Result<Self, ValidationError> {
        let name = bounded_text("skill_name", name.as_ref(), 2, 50)?;

        if let Some(years) = years_of_experience {
            if years > MAX_YEARS {
                return Err(ValidationError::OutOfRange {
                    field: "years_of_experience",
                    reason: format!("{years} exceeds {MAX_YEARS}"),
                });
            }
        }

        Ok(Self {
            name,
            level,
            years_of_experience,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> SkillLevel {
        self.level
    }

    pub fn years_of_experience(&self) -> Option<u8> {
        self.years_of_experience
    }

    pub fn has_name(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }

    pub fn name_contains(&self, keyword: &str) -> bool {
        contains_ignore_case(&self.name, keyword)
    }
}

impl PartialEq for Skill {
    fn eq(&self, other: &Self) -> bool {
        self.has_name(&other.name)
    }
}

impl Eq for Skill {}

impl Hash for Skill {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.to_lowercase().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_order_by_rank() {
        assert!(SkillLevel::Beginner < SkillLevel::Intermediate);
        assert!(SkillLevel::Intermediate < SkillLevel::Advanced);
        assert!(SkillLevel::Advanced < SkillLevel::Expert);

        let ranks: Vec<u8> = SkillLevel::ALL.iter().map(|l| l.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_matching_bonus_is_monotonic_in_level() {
        let bonuses: Vec<u32> = SkillLevel::ALL.iter().map(|l| l.matching_bonus()).collect();
        assert_eq!(bonuses, vec![0, 1, 3, 5]);
        assert!(bonuses.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_is_at_least() {
        assert!(SkillLevel::Expert.is_at_least(SkillLevel::Advanced));
        assert!(SkillLevel::Advanced.is_at_least(SkillLevel::Advanced));
        assert!(!SkillLevel::Beginner.is_at_least(SkillLevel::Intermediate));
    }

    #[test]
    fn test_level_parses_case_insensitively() {
        assert_eq!("expert".parse::<SkillLevel>(), Ok(SkillLevel::Expert));
        assert_eq!(" Advanced ".parse::<SkillLevel>(), Ok(SkillLevel::Advanced));
        assert!("guru".parse::<SkillLevel>().is_err());
    }

    #[test]
    fn test_skill_validation() {
        assert!(Skill::try_new("Go", SkillLevel::Beginner, None).is_ok());
        assert!(Skill::try_new("C", SkillLevel::Beginner, None).is_err());
        assert!(Skill::try_new("x".repeat(51), SkillLevel::Beginner, None).is_err());
        assert!(Skill::try_new("Rust", SkillLevel::Expert, Some(50)).is_ok());
        assert!(matches!(
            Skill::try_new("Rust", SkillLevel::Expert, Some(51)),
            Err(ValidationError::OutOfRange {
                field: "years_of_experience",
                ..
            })
        ));
    }

    #[test]
    fn test_skill_identity_is_name_only() {
        let a = Skill::try_new("Java", SkillLevel::Expert, Some(10)).unwrap();
        let b = Skill::try_new("JAVA", SkillLevel::Beginner, None).unwrap();
        let c = Skill::try_new("JavaScript", SkillLevel::Expert, Some(10)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(c.name_contains("script"));
        assert!(a.has_name(" java "));
    }
}
