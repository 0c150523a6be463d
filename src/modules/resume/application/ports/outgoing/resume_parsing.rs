use async_trait::async_trait;

use crate::resume::domain::value_objects::{FileType, StorageKey};
use crate::resume::domain::ParsedProfile;

/// Answer of the extraction provider. A `Failure` is a normal outcome, not a transport error.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsingResult {
    Success(ParsedProfile),
    Failure { error_message: String },
}

impl ParsingResult {
    pub fn failure(error_message: impl Into<String>) -> Self {
        ParsingResult::Failure {
            error_message: error_message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParsingResult::Success(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsingError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(FileType),

    #[error("Parsing provider error: {0}")]
    Provider(String),
}

#[async_trait]
pub trait ResumeParsingPort: Send + Sync {
    async fn parse_resume(
        &self,
        storage_key: &StorageKey,
        file_type: FileType,
    ) -> Result<ParsingResult, ParsingError>;

    async fn parse_text(&self, raw_text: &str) -> Result<ParsingResult, ParsingError>;

    fn can_parse(&self, file_type: FileType) -> bool;
}
