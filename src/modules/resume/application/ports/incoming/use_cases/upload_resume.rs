use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;
use crate::resume::application::ports::outgoing::{FileStorageError, ResumeRepositoryError};
use crate::resume::domain::value_objects::{FileName, FileSize, FileType, StorageKey};
use crate::resume::domain::{ResumeId, ResumePolicy, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadResumeCommandError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("File type '{0}' is not accepted")]
    FileTypeNotAllowed(FileType),

    #[error("File size {actual_bytes} bytes is outside [{min_bytes}, {max_bytes}]")]
    FileSizeOutOfPolicy {
        min_bytes: u64,
        max_bytes: u64,
        actual_bytes: u64,
    },
}

/// Validated upload request. Built through [`UploadResumeCommand::builder`].
#[derive(Clone)]
pub struct UploadResumeCommand {
    owner: UserId,
    file_name: FileName,
    file_type: FileType,
    size: FileSize,
    bytes: Vec<u8>,
}

impl UploadResumeCommand {
    pub fn builder() -> UploadResumeCommandBuilder {
        UploadResumeCommandBuilder::default()
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }
    pub fn file_name(&self) -> &FileName {
        &self.file_name
    }
    pub fn file_type(&self) -> FileType {
        self.file_type
    }
    pub fn size(&self) -> FileSize {
        self.size
    }
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

// Keeps file contents out of logs.
impl std::fmt::Debug for UploadResumeCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadResumeCommand")
            .field("owner", &self.owner)
            .field("file_name", &self.file_name)
            .field("file_type", &self.file_type)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct UploadResumeCommandBuilder {
    owner: Option<UserId>,
    file_name: Option<String>,
    mime_type: Option<String>,
    bytes: Option<Vec<u8>>,
}

impl UploadResumeCommandBuilder {
    pub fn owner(mut self, owner: UserId) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn bytes(mut self, bytes: Vec<u8>) -> Self {
        self.bytes = Some(bytes);
        self
    }

    /// Build a validated command against the injected policy.
    pub fn build(self, policy: &ResumePolicy) -> Result<UploadResumeCommand, UploadResumeCommandError> {
        let owner = self
            .owner
            .ok_or(UploadResumeCommandError::MissingField("owner"))?;
        let file_name = self
            .file_name
            .ok_or(UploadResumeCommandError::MissingField("file_name"))?;
        let mime_type = self
            .mime_type
            .ok_or(UploadResumeCommandError::MissingField("mime_type"))?;
        let bytes = self
            .bytes
            .ok_or(UploadResumeCommandError::MissingField("bytes"))?;

        // 1) Name rules, then policy length cap
        let file_name = FileName::try_new(file_name)?;
        let actual = file_name.as_str().chars().count();
        if actual > policy.max_file_name_len {
            return Err(ValidationError::Length {
                field: "file_name",
                min: 1,
                max: policy.max_file_name_len,
                actual,
            }
            .into());
        }

        // 2) Mime allow-list + mime/ext consistency
        let file_type = FileType::from_mime_type(&mime_type)?;
        if file_name.file_type() != Some(file_type) {
            return Err(ValidationError::MimeExtensionMismatch {
                mime_type,
                ext: file_name.extension(),
            }
            .into());
        }
        if !policy.allows(file_type) {
            return Err(UploadResumeCommandError::FileTypeNotAllowed(file_type));
        }

        // 3) Size: policy window first, then the hard domain limits
        let actual_bytes = bytes.len() as u64;
        if actual_bytes < policy.min_file_size_bytes || actual_bytes > policy.max_file_size_bytes {
            return Err(UploadResumeCommandError::FileSizeOutOfPolicy {
                min_bytes: policy.min_file_size_bytes,
                max_bytes: policy.max_file_size_bytes,
                actual_bytes,
            });
        }
        let size = FileSize::try_new(actual_bytes)?;

        Ok(UploadResumeCommand {
            owner,
            file_name,
            file_type,
            size,
            bytes,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedResume {
    pub resume_id: ResumeId,
    pub storage_key: StorageKey,
    pub access_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadResumeError {
    #[error("Storage service error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Invalid file: {0}")]
    InvalidFile(String),
}

impl From<FileStorageError> for UploadResumeError {
    fn from(error: FileStorageError) -> Self {
        UploadResumeError::StorageError(error.to_string())
    }
}

impl From<ResumeRepositoryError> for UploadResumeError {
    fn from(error: ResumeRepositoryError) -> Self {
        UploadResumeError::RepositoryError(error.to_string())
    }
}

#[async_trait]
pub trait UploadResumeUseCase: Send + Sync {
    async fn execute(&self, command: UploadResumeCommand)
        -> Result<UploadedResume, UploadResumeError>;
}
