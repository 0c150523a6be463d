use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::resume::domain::errors::ValidationError;

const MIN_LEN: usize = 2;
const MAX_LEN: usize = 100;

/// Candidate's display name. Letters of any script, separated by single spaces.
///
/// Equality ignores case: "Jane Doe" == "JANE DOE".
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CandidateName(String);

impl CandidateName {
    pub fn try_new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyField("candidate_name"));
        }

        let actual = trimmed.chars().count();
        if !(MIN_LEN..=MAX_LEN).contains(&actual) {
            return Err(ValidationError::Length {
                field: "candidate_name",
                min: MIN_LEN,
                max: MAX_LEN,
                actual,
            });
        }

        if !trimmed.chars().all(|c| c.is_alphabetic() || c == ' ') || trimmed.contains("  ") {
            return Err(ValidationError::InvalidCharacters("candidate_name"));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn folded(&self) -> String {
        self.0.to_lowercase()
    }
}

impl PartialEq for CandidateName {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl Eq for CandidateName {}

impl Hash for CandidateName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded().hash(state);
    }
}

impl fmt::Display for CandidateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
