use async_trait::async_trait;
use chrono::{Duration, Utc};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::auth::application::domain::entities::UserId;
use crate::resume::application::ports::outgoing::{FileStorageError, FileStoragePort, StoredFile};
use crate::resume::domain::value_objects::{FileName, FileSize, FileType, StorageKey};

/// Length of the content hash prefix inside an object key.
const KEY_HASH_LEN: usize = 16;

const UPLOAD_URL_TTL_MINUTES: u32 = 15;

#[derive(Debug, Clone)]
struct StoredObject {
    bytes: Vec<u8>,
    file_type: FileType,
}

/// Bucket kept in memory. Object keys look like `<owner>/<content hash>-<file name>`.
#[derive(Debug, Clone)]
pub struct InMemoryFileStorage {
    bucket: String,
    objects: Arc<RwLock<HashMap<StorageKey, StoredObject>>>,
}

fn object_key(owner: UserId, name: &FileName, bytes: &[u8]) -> Result<StorageKey, FileStorageError> {
    let digest = format!("{:x}", Sha256::digest(bytes));
    StorageKey::try_new(format!("{}/{}-{}", owner, &digest[..KEY_HASH_LEN], name))
        .map_err(|e| FileStorageError::Rejected(e.to_string()))
}

impl InMemoryFileStorage {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn object_count(&self) -> usize {
        self.objects.read().await.len()
    }

    fn signed_url(&self, key: &StorageKey, ttl_minutes: u32) -> String {
        let expires = Utc::now() + Duration::minutes(i64::from(ttl_minutes));
        format!(
            "memory://{}/{}?expires={}",
            self.bucket,
            key,
            expires.timestamp()
        )
    }
}

#[async_trait]
impl FileStoragePort for InMemoryFileStorage {
    async fn upload_file(
        &self,
        bytes: Vec<u8>,
        name: &FileName,
        size: FileSize,
        file_type: FileType,
        owner: UserId,
    ) -> Result<StoredFile, FileStorageError> {
        if bytes.len() as u64 != size.bytes() {
            return Err(FileStorageError::Rejected(format!(
                "declared {} bytes, received {}",
                size.bytes(),
                bytes.len()
            )));
        }

        let key = object_key(owner, name, &bytes)?;
        let mut objects = self.objects.write().await;
        objects.insert(key.clone(), StoredObject { bytes, file_type });
        drop(objects);

        tracing::debug!(bucket = %self.bucket, storage_key = %key, "Stored resume file");
        Ok(StoredFile {
            access_url: self.signed_url(&key, UPLOAD_URL_TTL_MINUTES),
            storage_key: key,
            size,
        })
    }

    async fn download_file(&self, key: &StorageKey) -> Result<Vec<u8>, FileStorageError> {
        let objects = self.objects.read().await;
        objects
            .get(key)
            .map(|object| object.bytes.clone())
            .ok_or_else(|| FileStorageError::NotFound(key.to_string()))
    }

    async fn delete_file(&self, key: &StorageKey) -> Result<(), FileStorageError> {
        let mut objects = self.objects.write().await;
        objects
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| FileStorageError::NotFound(key.to_string()))
    }

    async fn file_exists(&self, key: &StorageKey) -> Result<bool, FileStorageError> {
        Ok(self.objects.read().await.contains_key(key))
    }

    async fn generate_access_url(
        &self,
        key: &StorageKey,
        ttl_minutes: u32,
    ) -> Result<String, FileStorageError> {
        if ttl_minutes == 0 {
            return Err(FileStorageError::Rejected(
                "access url ttl must be positive".to_string(),
            ));
        }

        let objects = self.objects.read().await;
        match objects.get(key) {
            Some(object) => {
                tracing::trace!(storage_key = %key, file_type = %object.file_type, "Signing access url");
                Ok(self.signed_url(key, ttl_minutes))
            }
            None => Err(FileStorageError::NotFound(key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(value: &str) -> FileName {
        FileName::try_new(value).unwrap()
    }

    async fn upload(storage: &InMemoryFileStorage, owner: UserId, bytes: &[u8]) -> StoredFile {
        storage
            .upload_file(
                bytes.to_vec(),
                &name("cv.pdf"),
                FileSize::try_new(bytes.len() as u64).unwrap(),
                FileType::Pdf,
                owner,
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_upload_and_download() {
        let storage = InMemoryFileStorage::new("resumes");
        let owner = UserId::new();
        let bytes = vec![1u8; 2048];

        let stored = upload(&storage, owner, &bytes).await;

        let prefix = format!("{}/", owner);
        assert!(stored.storage_key.as_str().starts_with(&prefix));
        assert!(stored.storage_key.as_str().ends_with("-cv.pdf"));
        assert!(stored.access_url.starts_with("memory://resumes/"));
        assert_eq!(storage.download_file(&stored.storage_key).await, Ok(bytes));
    }

    #[tokio::test]
    async fn test_key_depends_on_content() {
        let storage = InMemoryFileStorage::new("resumes");
        let owner = UserId::new();

        let a = upload(&storage, owner, &[1u8; 2048]).await;
        let b = upload(&storage, owner, &[2u8; 2048]).await;
        let again = upload(&storage, owner, &[1u8; 2048]).await;

        assert_ne!(a.storage_key, b.storage_key);
        assert_eq!(a.storage_key, again.storage_key);
        assert_eq!(storage.object_count().await, 2);
    }

    #[tokio::test]
    async fn test_size_mismatch_is_rejected() {
        let storage = InMemoryFileStorage::new("resumes");

        let result = storage
            .upload_file(
                vec![0u8; 2048],
                &name("cv.pdf"),
                FileSize::try_new(4096).unwrap(),
                FileType::Pdf,
                UserId::new(),
            )
            .await;

        assert!(matches!(result, Err(FileStorageError::Rejected(_))));
    }

    #[tokio::test]
    async fn test_delete_and_exists() {
        let storage = InMemoryFileStorage::new("resumes");
        let stored = upload(&storage, UserId::new(), &[9u8; 2048]).await;

        assert_eq!(storage.file_exists(&stored.storage_key).await, Ok(true));
        assert_eq!(storage.delete_file(&stored.storage_key).await, Ok(()));
        assert_eq!(storage.file_exists(&stored.storage_key).await, Ok(false));
        assert!(matches!(
            storage.delete_file(&stored.storage_key).await,
            Err(FileStorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_access_url_carries_expiry() {
        let storage = InMemoryFileStorage::new("resumes");
        let stored = upload(&storage, UserId::new(), &[3u8; 2048]).await;

        let url = storage
            .generate_access_url(&stored.storage_key, 30)
            .await
            .unwrap();
        let expires: i64 = url.rsplit("expires=").next().unwrap().parse().unwrap();
        let remaining = expires - Utc::now().timestamp();

        assert!((29 * 60..=30 * 60).contains(&remaining));
    }

    #[tokio::test]
    async fn test_access_url_for_missing_object() {
        let storage = InMemoryFileStorage::new("resumes");
        let key = StorageKey::try_new("nobody/none.pdf").unwrap();

        assert!(matches!(
            storage.generate_access_url(&key, 15).await,
            Err(FileStorageError::NotFound(_))
        ));
        assert!(matches!(
            storage.generate_access_url(&key, 0).await,
            Err(FileStorageError::Rejected(_))
        ));
    }
}
