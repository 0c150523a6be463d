use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::auth::application::domain::entities::UserId;
use crate::resume::application::ports::outgoing::{ResumeRepository, ResumeRepositoryError};
use crate::resume::domain::{Resume, ResumeId, ResumeSnapshot, ResumeStatus};

/// Process-local résumé store. Clones share the same rows.
///
/// Rows are kept as snapshots, so pending events never leak through a load.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResumeRepository {
    rows: Arc<RwLock<HashMap<ResumeId, ResumeSnapshot>>>,
}

impl InMemoryResumeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live rows, oldest upload first.
    async fn live_rows<F>(&self, keep: F) -> Vec<Resume>
    where
        F: Fn(&ResumeSnapshot) -> bool,
    {
        let rows = self.rows.read().await;
        let mut found: Vec<&ResumeSnapshot> = rows
            .values()
            .filter(|row| row.status != ResumeStatus::Deleted && keep(*row))
            .collect();
        found.sort_by(|a, b| a.uploaded_at.cmp(&b.uploaded_at).then(a.id.cmp(&b.id)));
        found.into_iter().cloned().map(Resume::restore).collect()
    }
}

#[async_trait]
impl ResumeRepository for InMemoryResumeRepository {
    async fn save(&self, resume: &Resume) -> Result<(), ResumeRepositoryError> {
        let mut rows = self.rows.write().await;
        rows.insert(resume.id(), resume.snapshot());
        Ok(())
    }

    async fn find_by_id(&self, id: ResumeId) -> Result<Option<Resume>, ResumeRepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows
            .get(&id)
            .filter(|row| row.status != ResumeStatus::Deleted)
            .cloned()
            .map(Resume::restore))
    }

    async fn find_by_user_id(&self, owner: UserId) -> Result<Vec<Resume>, ResumeRepositoryError> {
        Ok(self.live_rows(|row| row.owner == owner).await)
    }

    async fn find_by_id_and_user_id(
        &self,
        id: ResumeId,
        owner: UserId,
    ) -> Result<Option<Resume>, ResumeRepositoryError> {
        Ok(self
            .find_by_id(id)
            .await?
            .filter(|resume| resume.is_owned_by(owner)))
    }

    async fn delete_by_id(&self, id: ResumeId) -> Result<(), ResumeRepositoryError> {
        let mut rows = self.rows.write().await;
        rows.remove(&id)
            .map(|_| ())
            .ok_or(ResumeRepositoryError::NotFound)
    }

    async fn exists_by_id(&self, id: ResumeId) -> Result<bool, ResumeRepositoryError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn count_by_user_id(&self, owner: UserId) -> Result<usize, ResumeRepositoryError> {
        Ok(self.find_by_user_id(owner).await?.len())
    }

    async fn find_all(&self) -> Result<Vec<Resume>, ResumeRepositoryError> {
        Ok(self.live_rows(|_| true).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::ResumeBuilder;

    #[tokio::test]
    async fn test_save_then_find() {
        let repo = InMemoryResumeRepository::new();
        let resume = ResumeBuilder::new().name("Jane Doe").parsed();

        repo.save(&resume).await.unwrap();

        let found = repo.find_by_id(resume.id()).await.unwrap().unwrap();
        assert_eq!(found.snapshot(), resume.snapshot());
        assert!(found.pending_events().is_empty());
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_row() {
        let repo = InMemoryResumeRepository::new();
        let mut resume = ResumeBuilder::new().uploaded();
        repo.save(&resume).await.unwrap();

        resume.start_parsing().unwrap();
        repo.save(&resume).await.unwrap();

        let found = repo.find_by_id(resume.id()).await.unwrap().unwrap();
        assert_eq!(found.status(), ResumeStatus::Parsing);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_finders_are_scoped_to_owner() {
        let repo = InMemoryResumeRepository::new();
        let owner = UserId::new();
        let mine = ResumeBuilder::new().owner(owner).uploaded();
        let theirs = ResumeBuilder::new().uploaded();
        repo.save(&mine).await.unwrap();
        repo.save(&theirs).await.unwrap();

        assert_eq!(repo.count_by_user_id(owner).await, Ok(1));
        assert!(repo
            .find_by_id_and_user_id(theirs.id(), owner)
            .await
            .unwrap()
            .is_none());
        assert!(repo
            .find_by_id_and_user_id(mine.id(), owner)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_soft_deleted_rows_are_hidden() {
        let repo = InMemoryResumeRepository::new();
        let mut resume = ResumeBuilder::new().parsed();
        let owner = resume.owner();
        resume.delete(owner).unwrap();
        repo.save(&resume).await.unwrap();

        assert!(repo.find_by_id(resume.id()).await.unwrap().is_none());
        assert_eq!(repo.exists_by_id(resume.id()).await, Ok(false));
        assert_eq!(repo.count_by_user_id(owner).await, Ok(0));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_id_removes_row() {
        let repo = InMemoryResumeRepository::new();
        let resume = ResumeBuilder::new().uploaded();
        repo.save(&resume).await.unwrap();

        assert_eq!(repo.delete_by_id(resume.id()).await, Ok(()));
        assert_eq!(repo.exists_by_id(resume.id()).await, Ok(false));
        assert_eq!(
            repo.delete_by_id(resume.id()).await,
            Err(ResumeRepositoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_clones_share_rows() {
        let repo = InMemoryResumeRepository::new();
        let other_handle = repo.clone();
        let resume = ResumeBuilder::new().uploaded();

        repo.save(&resume).await.unwrap();

        assert_eq!(other_handle.exists_by_id(resume.id()).await, Ok(true));
    }
}
