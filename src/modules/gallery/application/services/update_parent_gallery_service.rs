use async_trait::async_trait;
use tracing::info;

use crate::cloud_storage::application::ports::outgoing::ObjectStore;
use crate::gallery::application::{
    domain::{
        dedup::deduplicate,
        entities::{GalleryItem, NewGalleryItem, ParentRef},
        outcome::GalleryWriteOutcome,
        parent_fields::ParentFields,
        policies::GalleryPolicy,
    },
    gallery_repository::GalleryRepository,
    ports::{
        incoming::use_cases::{GalleryWriteError, UpdateParentCommand, UpdateParentGalleryUseCase},
        outgoing::db::{
            GalleryQuery, GalleryQueryError, GalleryRepositoryError, GalleryTransaction,
            UnitOfWork,
        },
    },
};

use super::consistency_audit::audit_parent;
use super::remote_cleanup::{purge_unreferenced, removed_urls};
use super::write_flow::{abort, begin_failed, commit, stage_uploads, validate_write};

pub struct UpdateParentGalleryService<U, Q, S>
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

impl<U, Q, S> UpdateParentGalleryService<U, Q, S>
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

    /// Refuses unknown parents before anything is uploaded for them.
    async fn ensure_parent(&self, parent: &ParentRef) -> Result<(), GalleryWriteError> {
        match self.query.primary_image(parent).await {
            Ok(_) => Ok(()),
            Err(GalleryQueryError::ParentNotFound) => Err(GalleryWriteError::ParentNotFound),
            Err(GalleryQueryError::DatabaseError(message)) => Err(GalleryWriteError::Persistence {
                message,
                orphaned_uploads: Vec::new(),
            }),
        }
    }
}

struct Replaced {
    /// Gallery URLs then the primary image, as they were before the write.
    previous: Vec<String>,
    items: Vec<GalleryItem>,
}

async fn replace_gallery<T>(
    tx: &mut T,
    parent: &ParentRef,
    fields: Option<&ParentFields>,
    items: Vec<NewGalleryItem>,
) -> Result<Replaced, GalleryRepositoryError>
where
    T: GalleryTransaction,
{
    // Locks the parent row until commit.
    let previous_primary = tx.primary_image(parent).await?;

    if let Some(fields) = fields {
        tx.update_parent(parent, fields).await?;
    }

    let mut repo = GalleryRepository::new(&mut *tx);
    let previous: Vec<String> = repo
        .list_ordered(parent)
        .await?
        .into_iter()
        .map(|row| row.image_url)
        .chain(previous_primary)
        .collect();
    let items = repo.replace_all(parent, items).await?;

    tx.set_primary_image(parent, items.first().map(|i| i.image_url.as_str()))
        .await?;

    Ok(Replaced { previous, items })
}

#[async_trait]
impl<U, Q, S> UpdateParentGalleryUseCase for UpdateParentGalleryService<U, Q, S>
where
    U: UnitOfWork,
    Q: GalleryQuery,
    S: ObjectStore,
{
    async fn execute(
        &self,
        command: UpdateParentCommand,
    ) -> Result<GalleryWriteOutcome, GalleryWriteError> {
        let UpdateParentCommand {
            parent,
            fields,
            draft,
        } = command;

        validate_write(parent.parent_type(), fields.as_ref(), &draft, &self.policy)?;
        self.ensure_parent(&parent).await?;

        let entries = deduplicate(draft.into_ordered());
        let staged = stage_uploads(&self.store, parent.parent_type(), entries).await?;

        let mut tx = self
            .uow
            .begin()
            .await
            .map_err(|e| begin_failed(e, &staged.uploaded))?;

        let replaced =
            match replace_gallery(&mut tx, &parent, fields.as_ref(), staged.items).await {
                Ok(replaced) => replaced,
                Err(e) => return Err(abort(tx, e, &staged.uploaded).await),
            };
        commit(tx, &staged.uploaded).await?;

        let current: Vec<String> = replaced.items.iter().map(|i| i.image_url.clone()).collect();
        let removed = removed_urls(replaced.previous.iter().cloned(), &current);

        info!(
            parent = %parent,
            images = current.len(),
            removed = removed.len(),
            "Parent gallery replaced"
        );

        let cleanup = purge_unreferenced(&self.query, &self.store, removed).await;
        let audit = if self.policy.audit_after_write {
            Some(audit_parent(&self.query, &self.store, &parent, &replaced.previous).await)
        } else {
            None
        };

        Ok(GalleryWriteOutcome {
            parent,
            items: replaced.items,
            committed: true,
            cleanup,
            audit,
        })
    }
}
