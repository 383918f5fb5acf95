use async_trait::async_trait;
use tracing::info;

use crate::cloud_storage::application::ports::outgoing::ObjectStore;
use crate::gallery::application::{
    domain::{entities::ParentRef, outcome::GalleryWriteOutcome, policies::GalleryPolicy},
    gallery_repository::GalleryRepository,
    ports::{
        incoming::use_cases::{DeleteParentCascadingGalleryUseCase, GalleryWriteError},
        outgoing::db::{GalleryQuery, GalleryRepositoryError, GalleryTransaction, UnitOfWork},
    },
};

use super::consistency_audit::audit_parent;
use super::remote_cleanup::{purge_unreferenced, removed_urls};
use super::write_flow::{abort, begin_failed, commit};

pub struct DeleteParentCascadingGalleryService<U, Q, S>
where
    U: UnitOfWork,
    Q: GalleryQuery,
    S: ObjectStore,
{
    uow: U,
    query: Q,
    store: S,
    policy: GalleryPolicy,
}

impl<U, Q, S> DeleteParentCascadingGalleryService<U, Q, S>
where
    U: UnitOfWork,
    Q: GalleryQuery,
    S: ObjectStore,
{
    pub fn new(uow: U, query: Q, store: S, policy: GalleryPolicy) -> Self {
        Self {
            uow,
            query,
            store,
            policy,
        }
    }
}

/// Gallery rows first, then the parent. Returns every URL the parent held.
async fn delete_parent_and_gallery<T>(
    tx: &mut T,
    parent: &ParentRef,
) -> Result<Vec<String>, GalleryRepositoryError>
where
    T: GalleryTransaction,
{
    let primary = tx.primary_image(parent).await?;
    let removed = GalleryRepository::new(&mut *tx).delete_all(parent).await?;
    tx.delete_parent(parent).await?;

    Ok(removed_urls(removed.into_iter().chain(primary), &[]))
}

#[async_trait]
impl<U, Q, S> DeleteParentCascadingGalleryUseCase for DeleteParentCascadingGalleryService<U, Q, S>
where
    U: UnitOfWork,
    Q: GalleryQuery,
    S: ObjectStore,
{
    async fn execute(&self, parent: ParentRef) -> Result<GalleryWriteOutcome, GalleryWriteError> {
        let mut tx = self.uow.begin().await.map_err(|e| begin_failed(e, &[]))?;

        let removed = match delete_parent_and_gallery(&mut tx, &parent).await {
            Ok(removed) => removed,
            Err(e) => return Err(abort(tx, e, &[]).await),
        };
        commit(tx, &[]).await?;

        info!(parent = %parent, removed = removed.len(), "Parent deleted with gallery");

        let cleanup = purge_unreferenced(&self.query, &self.store, removed.clone()).await;
        let audit = if self.policy.audit_after_write {
            Some(audit_parent(&self.query, &self.store, &parent, &removed).await)
        } else {
            None
        };

        Ok(GalleryWriteOutcome {
            parent,
            items: Vec::new(),
            committed: true,
            cleanup,
            audit,
        })
    }
}
