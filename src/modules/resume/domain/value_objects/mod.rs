mod candidate_name;
mod contact_info;
mod education;
mod experience;
mod file;
mod skill;

pub use candidate_name::CandidateName;
pub use contact_info::{ContactInfo, Email, PhoneNumber};
pub use education::Education;
pub use experience::Experience;
pub use file::{
    FileDescriptor, FileName, FileSize, FileType, StorageKey, MAX_FILE_NAME_LEN,
    MAX_FILE_SIZE_BYTES, MIN_FILE_SIZE_BYTES,
};
pub use skill::{Skill, SkillLevel};

use chrono::NaiveDate;

use crate::resume::domain::errors::ValidationError;

// ============================================================================
// Shared validation helpers
// ============================================================================

/// Trims `value` and checks its length in characters (not bytes).
pub(crate) fn bounded_text(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }

    let actual = trimmed.chars().count();
    if actual < min || actual > max {
        return Err(ValidationError::Length {
            field,
            min,
            max,
            actual,
        });
    }

    Ok(trimmed.to_string())
}

/// Optional free text: blank collapses to `None`, otherwise capped at `max` characters.
pub(crate) fn optional_text(
    field: &'static str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let actual = trimmed.chars().count();
    if actual > max {
        return Err(ValidationError::Length {
            field,
            min: 0,
            max,
            actual,
        });
    }

    Ok(Some(trimmed.to_string()))
}

pub(crate) fn not_in_future(
    field: &'static str,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if date > today {
        return Err(ValidationError::FutureDate(field));
    }
    Ok(())
}

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_lowercase()
        .contains(needle.trim().to_lowercase().as_str())
}
