//! Steps shared by the create/update/delete orchestrators.

use serde_json::json;
use tracing::{error, warn};

use crate::cloud_storage::application::domain::entities::UploadRequest;
use crate::cloud_storage::application::ports::outgoing::ObjectStore;
use crate::gallery::application::domain::{
    dedup::deduplicate_items,
    entities::{NewGalleryItem, ParentType},
    gallery_entry::{GalleryDraft, GalleryEntry, ImageSource},
    parent_fields::{ParentFields, ValidationErrors},
    policies::GalleryPolicy,
};
use crate::gallery::application::ports::{
    incoming::use_cases::GalleryWriteError,
    outgoing::db::{GalleryRepositoryError, GalleryTransaction},
};

/// Field and draft checks, reported together.
pub(super) fn validate_write(
    parent_type: ParentType,
    fields: Option<&ParentFields>,
    draft: &GalleryDraft,
    policy: &GalleryPolicy,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if let Some(fields) = fields {
        if let Err(e) = fields.validate(parent_type) {
            errors.extend(e);
        }
    }
    if let Err(e) = policy.validate_draft(draft) {
        errors.extend(e);
    }

    errors.into_result()
}

#[derive(Debug)]
pub(super) struct StagedUploads {
    /// Every entry resolved to a URL, deduplicated by URL.
    pub items: Vec<NewGalleryItem>,
    /// URLs created by this request.
    pub uploaded: Vec<String>,
}

/// Uploads pending files one at a time, in list order. Remote entries pass
/// through untouched.
pub(super) async fn stage_uploads<S>(
    store: &S,
    parent_type: ParentType,
    entries: Vec<GalleryEntry>,
) -> Result<StagedUploads, GalleryWriteError>
where
    S: ObjectStore + ?Sized,
{
    let mut items = Vec::with_capacity(entries.len());
    let mut uploaded = Vec::new();

    for entry in entries {
        let url = match entry.source {
            ImageSource::Remote(url) => url,
            ImageSource::Pending(file) => {
                let request = UploadRequest::new(file.bytes, file.file_name, file.content_type)
                    .with_metadata("parentType", json!(parent_type.as_str()));

                match store.upload(request).await {
                    Ok(stored) => {
                        uploaded.push(stored.url.clone());
                        stored.url
                    }
                    Err(error) => {
                        let err = GalleryWriteError::Store {
                            error,
                            orphaned_uploads: uploaded,
                        };
                        report_failure(&err);
                        return Err(err);
                    }
                }
            }
        };
        items.push(NewGalleryItem::new(url, entry.alt_text));
    }

    Ok(StagedUploads {
        items: deduplicate_items(items),
        uploaded,
    })
}

/// Rolls back and converts the failure that caused it.
pub(super) async fn abort<T>(
    tx: T,
    cause: GalleryRepositoryError,
    uploaded: &[String],
) -> GalleryWriteError
where
    T: GalleryTransaction,
{
    if let Err(rollback_err) = tx.rollback().await {
        error!(error = %rollback_err, cause = %cause, "Rollback failed");
    }

    let err = GalleryWriteError::from_repository(cause, uploaded.to_vec());
    report_failure(&err);
    err
}

pub(super) async fn commit<T>(tx: T, uploaded: &[String]) -> Result<(), GalleryWriteError>
where
    T: GalleryTransaction,
{
    tx.commit().await.map_err(|cause| {
        let err = GalleryWriteError::from_repository(cause, uploaded.to_vec());
        report_failure(&err);
        err
    })
}

pub(super) fn begin_failed(cause: GalleryRepositoryError, uploaded: &[String]) -> GalleryWriteError {
    let err = GalleryWriteError::from_repository(cause, uploaded.to_vec());
    report_failure(&err);
    err
}

fn report_failure(err: &GalleryWriteError) {
    let orphaned = err.orphaned_uploads();
    if !orphaned.is_empty() {
        warn!(
            error = %err,
            orphaned = ?orphaned,
            "Gallery write failed after uploading; blobs left unreferenced"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud_storage::application::ports::outgoing::ObjectStoreError;
    use crate::gallery::application::domain::gallery_entry::LocalFile;
    use crate::tests::support::object_store::FakeObjectStore;

    fn local(name: &str) -> GalleryEntry {
        GalleryEntry::pending(
            LocalFile {
                file_name: name.to_string(),
                content_type: "image/png".to_string(),
                bytes: vec![1, 2, 3],
            },
            "alt",
        )
    }

    #[tokio::test]
    async fn stage_uploads_keeps_list_order_and_collapses_repeated_urls() {
        let store = FakeObjectStore::new();
        let entries = vec![
            GalleryEntry::remote("/api/cloud/files/existing", "a"),
            local("new.png"),
            GalleryEntry::remote("/api/cloud/files/existing", "dup"),
        ];

        let staged = stage_uploads(&store, ParentType::Project, entries)
            .await
            .unwrap();

        let urls: Vec<&str> = staged.items.iter().map(|i| i.image_url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["/api/cloud/files/existing", FakeObjectStore::file_url(1).as_str()]
        );
        assert_eq!(staged.uploaded, vec![FakeObjectStore::file_url(1)]);
        assert_eq!(
            store.uploads()[0].metadata.get("parentType"),
            Some(&json!("project"))
        );
    }

    #[tokio::test]
    async fn stage_uploads_reports_earlier_uploads_when_a_later_one_fails() {
        let store = FakeObjectStore::new().fail_uploads_after(1, ObjectStoreError::RateLimited);

        let err = stage_uploads(
            &store,
            ParentType::Event,
            vec![local("one.png"), local("two.png"), local("three.png")],
        )
        .await
        .unwrap_err();

        assert_eq!(
            err,
            GalleryWriteError::Store {
                error: ObjectStoreError::RateLimited,
                orphaned_uploads: vec![FakeObjectStore::file_url(1)],
            }
        );
        assert_eq!(store.uploads().len(), 1);
    }

    #[test]
    fn validate_write_collects_field_and_draft_errors() {
        let policy = GalleryPolicy::default();
        let draft = GalleryDraft::new(Some(GalleryEntry::remote("  ", "")), vec![]);

        let errors = validate_write(
            ParentType::Event,
            Some(&ParentFields::default()),
            &draft,
            &policy,
        )
        .unwrap_err();

        assert!(errors.has("title.en"));
        assert!(errors.has("event_date"));
        assert!(errors.has("primary_image.image_url"));
    }

    #[test]
    fn validate_write_without_fields_checks_draft_only() {
        let policy = GalleryPolicy::default();
        let draft = GalleryDraft::new(None, vec![GalleryEntry::remote("/x", "")]);

        assert!(validate_write(ParentType::Event, None, &draft, &policy).is_ok());
    }
}
