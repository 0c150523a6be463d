use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of an uploaded résumé.
///
/// ```text
/// UPLOADED     -> PARSING | DELETED
/// PARSING      -> PARSED | PARSE_FAILED
/// PARSED       -> ARCHIVED | DELETED
/// PARSE_FAILED -> PARSING | DELETED
/// ARCHIVED     -> PARSED | DELETED
/// DELETED      (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResumeStatus {
    Uploaded,
    Parsing,
    Parsed,
    ParseFailed,
    Archived,
    Deleted,
}

/// Role flags attached to each status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCapabilities {
    pub editable: bool,
    pub searchable: bool,
}

impl ResumeStatus {
    pub const ALL: [ResumeStatus; 6] = [
        ResumeStatus::Uploaded,
        ResumeStatus::Parsing,
        ResumeStatus::Parsed,
        ResumeStatus::ParseFailed,
        ResumeStatus::Archived,
        ResumeStatus::Deleted,
    ];

    /// The transition table. Every state appears exactly once.
    pub const fn allowed_transitions(self) -> &'static [ResumeStatus] {
        use ResumeStatus::*;
        match self {
            Uploaded => &[Parsing, Deleted],
            Parsing => &[Parsed, ParseFailed],
            Parsed => &[Archived, Deleted],
            ParseFailed => &[Parsing, Deleted],
            Archived => &[Parsed, Deleted],
            Deleted => &[],
        }
    }

    pub const fn capabilities(self) -> StatusCapabilities {
        use ResumeStatus::*;
        let (editable, searchable) = match self {
            Uploaded => (true, true),
            Parsing => (false, false),
            Parsed => (true, true),
            ParseFailed => (true, false),
            Archived => (false, false),
            Deleted => (false, false),
        };
        StatusCapabilities {
            editable,
            searchable,
        }
    }

    pub fn can_transition_to(self, target: ResumeStatus) -> bool {
        self != target && self.allowed_transitions().contains(&target)
    }

    /// Parsing may only start from a fresh upload or after a failure.
    pub const fn can_parse(self) -> bool {
        matches!(self, ResumeStatus::Uploaded | ResumeStatus::ParseFailed)
    }

    pub const fn can_reparse(self) -> bool {
        matches!(self, ResumeStatus::ParseFailed)
    }

    pub const fn can_edit(self) -> bool {
        self.capabilities().editable
    }

    pub const fn is_searchable(self) -> bool {
        self.capabilities().searchable
    }

    /// An in-flight parse must settle before the résumé can be deleted.
    pub const fn can_be_deleted(self) -> bool {
        !matches!(self, ResumeStatus::Parsing | ResumeStatus::Deleted)
    }

    pub const fn can_be_archived(self) -> bool {
        matches!(self, ResumeStatus::Parsed)
    }

    pub const fn is_parsed(self) -> bool {
        matches!(self, ResumeStatus::Parsed)
    }

    pub const fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    pub const fn label(self) -> &'static str {
        match self {
            ResumeStatus::Uploaded => "UPLOADED",
            ResumeStatus::Parsing => "PARSING",
            ResumeStatus::Parsed => "PARSED",
            ResumeStatus::ParseFailed => "PARSE_FAILED",
            ResumeStatus::Archived => "ARCHIVED",
            ResumeStatus::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for ResumeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
