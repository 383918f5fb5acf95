use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::cloud_storage::application::ports::outgoing::ObjectStore;
use crate::gallery::application::ports::outgoing::db::BlobReferences;
use crate::gallery::application::services::purge_unreferenced;
use crate::special_project::application::domain::entities::SpecialProjectWriteOutcome;
use crate::special_project::application::ports::{
    incoming::use_cases::{DeleteSpecialProjectUseCase, SpecialProjectError},
    outgoing::SpecialProjectRepository,
};

pub struct DeleteSpecialProjectService<R, B, S>
where
    R: SpecialProjectRepository,
    B: BlobReferences,
    S: ObjectStore,
{
    repo: R,
    refs: B,
    store: S,
}

impl<R, B, S> DeleteSpecialProjectService<R, B, S>
where
    R: SpecialProjectRepository,
    B: BlobReferences,
    S: ObjectStore,
{
    pub fn new(repo: R, refs: B, store: S) -> Self {
        Self { repo, refs, store }
    }
}

#[async_trait]
impl<R, B, S> DeleteSpecialProjectUseCase for DeleteSpecialProjectService<R, B, S>
where
    R: SpecialProjectRepository,
    B: BlobReferences,
    S: ObjectStore,
{
    async fn execute(&self, id: Uuid) -> Result<SpecialProjectWriteOutcome, SpecialProjectError> {
        let removed = self.repo.delete(id).await?;
        info!(id = %removed.id, "Special project deleted");

        let urls = if removed.image_url.trim().is_empty() {
            Vec::new()
        } else {
            vec![removed.image_url]
        };
        let cleanup = purge_unreferenced(&self.refs, &self.store, urls).await;

        Ok(SpecialProjectWriteOutcome {
            project: None,
            cleanup,
        })
    }
}
