use async_trait::async_trait;
use mockall::mock;

use crate::auth::application::domain::entities::UserId;
use crate::resume::application::ports::outgoing::{
    FileStorageError, FileStoragePort, ParsingError, ParsingResult, ResumeParsingPort,
    ResumeRepository, ResumeRepositoryError, StoredFile,
};
use crate::resume::domain::value_objects::{FileName, FileSize, FileType, StorageKey};
use crate::resume::domain::{Resume, ResumeId};

mock! {
    pub ResumeRepo {}
    #[async_trait]
    impl ResumeRepository for ResumeRepo {
        async fn save(&self, resume: &Resume) -> Result<(), ResumeRepositoryError>;
        async fn find_by_id(&self, id: ResumeId) -> Result<Option<Resume>, ResumeRepositoryError>;
        async fn find_by_user_id(&self, owner: UserId) -> Result<Vec<Resume>, ResumeRepositoryError>;
        async fn find_by_id_and_user_id(
            &self,
            id: ResumeId,
            owner: UserId,
        ) -> Result<Option<Resume>, ResumeRepositoryError>;
        async fn delete_by_id(&self, id: ResumeId) -> Result<(), ResumeRepositoryError>;
        async fn exists_by_id(&self, id: ResumeId) -> Result<bool, ResumeRepositoryError>;
        async fn count_by_user_id(&self, owner: UserId) -> Result<usize, ResumeRepositoryError>;
        async fn find_all(&self) -> Result<Vec<Resume>, ResumeRepositoryError>;
    }
}

mock! {
    pub Storage {}
    #[async_trait]
    impl FileStoragePort for Storage {
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
        async fn generate_access_url(
            &self,
            key: &StorageKey,
            ttl_minutes: u32,
        ) -> Result<String, FileStorageError>;
    }
}

mock! {
    pub Parser {}
    #[async_trait]
    impl ResumeParsingPort for Parser {
        async fn parse_resume(
            &self,
            storage_key: &StorageKey,
            file_type: FileType,
        ) -> Result<ParsingResult, ParsingError>;
        async fn parse_text(&self, raw_text: &str) -> Result<ParsingResult, ParsingError>;
        fn can_parse(&self, file_type: FileType) -> bool;
    }
}

pub(crate) fn stored_file(key: &str, size: FileSize) -> StoredFile {
    StoredFile {
        storage_key: StorageKey::try_new(key).unwrap(),
        access_url: format!("https://storage.test/{key}"),
        size,
    }
}
