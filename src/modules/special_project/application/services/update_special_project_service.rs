use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::cloud_storage::application::ports::outgoing::ObjectStore;
use crate::gallery::application::ports::outgoing::db::BlobReferences;
use crate::gallery::application::services::{purge_unreferenced, removed_urls};
use crate::special_project::application::domain::entities::{
    SpecialProjectChanges, SpecialProjectWriteOutcome,
};
use crate::special_project::application::ports::{
    incoming::use_cases::{SpecialProjectError, UpdateSpecialProjectUseCase},
    outgoing::SpecialProjectRepository,
};

pub struct UpdateSpecialProjectService<R, B, S>
where
    R: SpecialProjectRepository,
    B: BlobReferences,
    S: ObjectStore,
{
    repo: R,
    refs: B,
    store: S,
}

impl<R, B, S> UpdateSpecialProjectService<R, B, S>
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
impl<R, B, S> UpdateSpecialProjectUseCase for UpdateSpecialProjectService<R, B, S>
where
    R: SpecialProjectRepository,
    B: BlobReferences,
    S: ObjectStore,
{
    async fn execute(
        &self,
        id: Uuid,
        changes: SpecialProjectChanges,
    ) -> Result<SpecialProjectWriteOutcome, SpecialProjectError> {
        changes.validate()?;
        let changes = SpecialProjectChanges {
            image_url: changes.image_url.map(|u| u.trim().to_string()),
            ..changes
        };

        let updated = self.repo.update(id, &changes).await?;
        info!(id = %id, sort_order = updated.project.sort_order, "Special project updated");

        // The row change is committed; the old image goes only if unreferenced.
        let dropped = removed_urls(
            [updated.previous_image_url],
            std::slice::from_ref(&updated.project.image_url),
        );
        let cleanup = purge_unreferenced(&self.refs, &self.store, dropped).await;

        Ok(SpecialProjectWriteOutcome {
            project: Some(updated.project),
            cleanup,
        })
    }
}
