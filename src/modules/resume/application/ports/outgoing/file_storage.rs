use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::resume::domain::value_objects::{FileName, FileSize, FileType, StorageKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub storage_key: StorageKey,
    pub access_url: String,
    pub size: FileSize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileStorageError {
    #[error("Stored file not found: {0}")]
    NotFound(String),

    #[error("Upload rejected: {0}")]
    Rejected(String),

    #[error("Storage service error: {0}")]
    Unavailable(String),
}

/// Object storage for résumé files. Used by the application layer only.
#[async_trait]
pub trait FileStoragePort: Send + Sync {
    async fn upload_file(
        &self,
        bytes: Vec<u8>,
        name: &FileName,
        size: FileSize,
        file_type: FileType,
        owner: UserId,
    ) -> Result<StoredFile, FileStorageError>;

    async fn download_file(&self, key: &StorageKey) -> Result<Vec<u8>, FileStorageError>;

    async fn delete_file(&self, key: &StorageKey) -> Result<(), FileStorageError>;

    async fn file_exists(&self, key: &StorageKey) -> Result<bool, FileStorageError>;

    /// Time-limited read URL.
    async fn generate_access_url(
        &self,
        key: &StorageKey,
        ttl_minutes: u32,
    ) -> Result<String, FileStorageError>;
}
