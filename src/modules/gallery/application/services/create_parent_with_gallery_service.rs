use async_trait::async_trait;
use tracing::info;

use crate::cloud_storage::application::ports::outgoing::ObjectStore;
use crate::gallery::application::{
    domain::{
        dedup::deduplicate,
        entities::{GalleryItem, NewGalleryItem, ParentRef, ParentType},
        outcome::GalleryWriteOutcome,
        parent_fields::ParentFields,
        policies::GalleryPolicy,
    },
    gallery_repository::GalleryRepository,
    ports::{
        incoming::use_cases::{
            CreateParentCommand, CreateParentWithGalleryUseCase, GalleryWriteError,
        },
        outgoing::db::{GalleryRepositoryError, GalleryTransaction, UnitOfWork},
    },
};

use super::write_flow::{abort, begin_failed, commit, stage_uploads, validate_write};

pub struct CreateParentWithGalleryService<U, S>
where
    U: UnitOfWork,
    S: ObjectStore,
{
    uow: U,
    store: S,
    policy: GalleryPolicy,
}

impl<U, S> CreateParentWithGalleryService<U, S>
where
    U: UnitOfWork,
    S: ObjectStore,
{
    pub fn new(uow: U, store: S, policy: GalleryPolicy) -> Self {
        Self { uow, store, policy }
    }
}

/// Parent row, appended gallery, then the primary image pointer.
async fn insert_parent_with_gallery<T>(
    tx: &mut T,
    parent_type: ParentType,
    fields: &ParentFields,
    items: Vec<NewGalleryItem>,
) -> Result<(ParentRef, Vec<GalleryItem>), GalleryRepositoryError>
where
    T: GalleryTransaction,
{
    let parent = tx.insert_parent(parent_type, fields).await?;
    let items = GalleryRepository::new(&mut *tx)
        .append_from(&parent, items)
        .await?;
    tx.set_primary_image(&parent, items.first().map(|i| i.image_url.as_str()))
        .await?;

    Ok((parent, items))
}

#[async_trait]
impl<U, S> CreateParentWithGalleryUseCase for CreateParentWithGalleryService<U, S>
where
    U: UnitOfWork,
    S: ObjectStore,
{
    async fn execute(
        &self,
        command: CreateParentCommand,
    ) -> Result<GalleryWriteOutcome, GalleryWriteError> {
        let CreateParentCommand {
            parent_type,
            fields,
            draft,
        } = command;

        validate_write(parent_type, Some(&fields), &draft, &self.policy)?;

        let entries = deduplicate(draft.into_ordered());
        let staged = stage_uploads(&self.store, parent_type, entries).await?;

        let mut tx = self
            .uow
            .begin()
            .await
            .map_err(|e| begin_failed(e, &staged.uploaded))?;

        let (parent, items) =
            match insert_parent_with_gallery(&mut tx, parent_type, &fields, staged.items).await {
                Ok(written) => written,
                Err(e) => return Err(abort(tx, e, &staged.uploaded).await),
            };
        commit(tx, &staged.uploaded).await?;

        info!(
            parent = %parent,
            images = items.len(),
            uploaded = staged.uploaded.len(),
            "Parent created with gallery"
        );
        Ok(GalleryWriteOutcome::committed(parent, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud_storage::application::ports::outgoing::ObjectStoreError;
    use crate::gallery::application::domain::gallery_entry::{GalleryDraft, GalleryEntry, LocalFile};
    use crate::tests::support::gallery_db::{sample_fields, InMemoryGalleryDb};
    use crate::tests::support::object_store::FakeObjectStore;

    fn service(
        db: &InMemoryGalleryDb,
        store: &FakeObjectStore,
    ) -> CreateParentWithGalleryService<InMemoryGalleryDb, FakeObjectStore> {
        CreateParentWithGalleryService::new(db.clone(), store.clone(), GalleryPolicy::default())
    }

    fn command(parent_type: ParentType, draft: GalleryDraft) -> CreateParentCommand {
        CreateParentCommand {
            parent_type,
            fields: sample_fields("Launch"),
            draft,
        }
    }

    fn png(name: &str) -> LocalFile {
        LocalFile {
            file_name: name.to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0u8; 16],
        }
    }

    fn indexed(db: &InMemoryGalleryDb, parent: &ParentRef) -> Vec<(String, i32)> {
        db.rows_for(parent)
            .into_iter()
            .map(|r| (r.image_url, r.order_index))
            .collect()
    }

    #[tokio::test]
    async fn primary_duplicated_in_extras_is_stored_once() {
        let db = InMemoryGalleryDb::new();
        let store = FakeObjectStore::new();

        let draft = GalleryDraft::new(
            Some(GalleryEntry::remote("img1.jpg", "cover").with_hint(1)),
            vec![
                GalleryEntry::remote("img2.jpg", "").with_hint(2),
                GalleryEntry::remote("img1.jpg", "again").with_hint(3),
            ],
        );

        let outcome = service(&db, &store)
            .execute(command(ParentType::Project, draft))
            .await
            .unwrap();

        assert!(outcome.committed);
        assert_eq!(
            indexed(&db, &outcome.parent),
            vec![("img1.jpg".to_string(), 1), ("img2.jpg".to_string(), 2)]
        );
        assert_eq!(db.rows_for(&outcome.parent)[0].alt_text, "cover");
        assert_eq!(db.primary_of(&outcome.parent).as_deref(), Some("img1.jpg"));
        assert!(store.uploads().is_empty());
    }

    #[tokio::test]
    async fn pending_files_are_uploaded_before_the_transaction() {
        let db = InMemoryGalleryDb::new();
        let store = FakeObjectStore::new();

        let draft = GalleryDraft::new(
            Some(GalleryEntry::pending(png("cover.png"), "cover")),
            vec![
                GalleryEntry::pending(png("cover.png"), "dup of cover"),
                GalleryEntry::remote("/api/cloud/files/kept", "kept"),
            ],
        );

        let outcome = service(&db, &store)
            .execute(command(ParentType::Product, draft))
            .await
            .unwrap();

        assert_eq!(store.uploads().len(), 1);
        assert_eq!(
            indexed(&db, &outcome.parent),
            vec![
                (FakeObjectStore::file_url(1), 1),
                ("/api/cloud/files/kept".to_string(), 2)
            ]
        );
        assert_eq!(db.commits(), 1);
    }

    #[tokio::test]
    async fn invalid_fields_fail_before_any_side_effect() {
        let db = InMemoryGalleryDb::new();
        let store = FakeObjectStore::new();
        let mut cmd = command(
            ParentType::Event,
            GalleryDraft::new(Some(GalleryEntry::pending(png("a.png"), "")), vec![]),
        );
        cmd.fields.title.en.clear();

        let err = service(&db, &store).execute(cmd).await.unwrap_err();

        match err {
            GalleryWriteError::Validation(errors) => {
                assert!(errors.has("title.en"));
                assert!(errors.has("event_date"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(store.uploads().is_empty());
        assert_eq!(db.begun(), 0);
    }

    #[tokio::test]
    async fn upload_failure_aborts_before_the_transaction() {
        let db = InMemoryGalleryDb::new();
        let store = FakeObjectStore::new()
            .fail_uploads_with(ObjectStoreError::AuthError("bad key".into()));

        let err = service(&db, &store)
            .execute(command(
                ParentType::Project,
                GalleryDraft::new(Some(GalleryEntry::pending(png("a.png"), "")), vec![]),
            ))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GalleryWriteError::Store {
                error: ObjectStoreError::AuthError(_),
                ..
            }
        ));
        assert_eq!(db.begun(), 0);
        assert_eq!(db.parent_count(), 0);
    }

    #[tokio::test]
    async fn failed_insert_rolls_back_and_reports_orphaned_uploads() {
        let db = InMemoryGalleryDb::new();
        let store = FakeObjectStore::new();
        db.fail_next_insert("connection reset");

        let err = service(&db, &store)
            .execute(command(
                ParentType::Project,
                GalleryDraft::new(
                    Some(GalleryEntry::pending(png("a.png"), "")),
                    vec![GalleryEntry::remote("img2.jpg", "")],
                ),
            ))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GalleryWriteError::Persistence {
                message: "connection reset".into(),
                orphaned_uploads: vec![FakeObjectStore::file_url(1)],
            }
        );
        assert_eq!(db.rollbacks(), 1);
        assert_eq!(db.parent_count(), 0);
        assert_eq!(db.total_rows(), 0);
        // Orphans stay in the store
        assert!(store.deletes().is_empty());
        assert!(store.contains(&FakeObjectStore::file_id(1)));
    }

    #[tokio::test]
    async fn failed_commit_leaves_nothing_behind() {
        let db = InMemoryGalleryDb::new();
        let store = FakeObjectStore::new();
        db.fail_next_commit("serialization failure");

        let err = service(&db, &store)
            .execute(command(
                ParentType::Product,
                GalleryDraft::new(Some(GalleryEntry::remote("img1.jpg", "")), vec![]),
            ))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GalleryWriteError::Persistence {
                message: "serialization failure".into(),
                orphaned_uploads: vec![],
            }
        );
        assert_eq!(db.parent_count(), 0);
        assert_eq!(db.commits(), 0);
    }

    #[tokio::test]
    async fn empty_draft_creates_parent_without_primary_image() {
        let db = InMemoryGalleryDb::new();
        let store = FakeObjectStore::new();

        let outcome = service(&db, &store)
            .execute(command(ParentType::Project, GalleryDraft::default()))
            .await
            .unwrap();

        assert!(outcome.items.is_empty());
        assert!(db.parent(&outcome.parent).is_some());
        assert_eq!(db.primary_of(&outcome.parent), None);
    }
}
