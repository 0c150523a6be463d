use crate::auth::application::domain::entities::UserId;
use crate::resume::domain::status::ResumeStatus;

/// Raised by value-object smart constructors. Never raised after construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Field '{0}' cannot be empty")]
    EmptyField(&'static str),

    #[error("Field '{field}' must be between {min} and {max} characters (got {actual})")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Field '{0}' contains invalid characters")]
    InvalidCharacters(&'static str),

    #[error("Field '{field}' is out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },

    #[error("Date '{0}' cannot be in the future")]
    FutureDate(&'static str),

    #[error("End date precedes start date")]
    EndBeforeStart,

    #[error("Invalid file extension: {0}")]
    InvalidExtension(String),

    #[error("Unsupported mime type: {0}")]
    UnsupportedMimeType(String),

    #[error("Mime type does not match file extension (mime={mime_type}, ext={ext})")]
    MimeExtensionMismatch { mime_type: String, ext: String },

    #[error("File size {actual_bytes} bytes is outside [{min_bytes}, {max_bytes}]")]
    FileSizeOutOfRange {
        min_bytes: u64,
        max_bytes: u64,
        actual_bytes: u64,
    },

    #[error("Extension change from '{from}' to '{to}' requires replacing the file")]
    ExtensionChange { from: String, to: String },

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Contact info requires a phone number or an email")]
    MissingContact,
}

/// Errors raised by the Resume aggregate. A rejected call leaves the aggregate untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResumeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Cannot {action} while resume is {from}")]
    InvalidStateTransition {
        from: ResumeStatus,
        action: &'static str,
    },

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("User {requested_by} is not the owner of this resume")]
    OwnershipViolation { requested_by: UserId },
}
