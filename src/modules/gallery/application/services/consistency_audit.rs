use futures::future::join_all;
use tracing::{info, warn};

use crate::cloud_storage::application::domain::file_locator::extract_file_id;
use crate::cloud_storage::application::ports::outgoing::{ObjectStore, ObjectStoreError};
use crate::gallery::application::domain::{
    dedup::first_wins, entities::ParentRef, outcome::AuditReport,
};
use crate::gallery::application::ports::outgoing::db::{GalleryQuery, GalleryQueryError};

use super::remote_cleanup::removed_urls;

enum Presence {
    Present,
    Missing,
    Unknown,
}

async fn presence<S>(store: &S, url: &str) -> Presence
where
    S: ObjectStore + ?Sized,
{
    let Some(file_id) = extract_file_id(url) else {
        return Presence::Unknown;
    };

    match store.get_metadata(&file_id).await {
        Ok(_) => Presence::Present,
        Err(ObjectStoreError::NotFound) => Presence::Missing,
        Err(e) => {
            warn!(url, error = %e, "Audit lookup failed");
            Presence::Unknown
        }
    }
}

/// Gallery rows plus the denormalized primary image, deduplicated.
/// A parent that no longer exists references nothing.
async fn current_urls<Q>(query: &Q, parent: &ParentRef) -> Result<Vec<String>, GalleryQueryError>
where
    Q: GalleryQuery + ?Sized,
{
    let rows = match query.list_ordered(parent).await {
        Ok(rows) => rows,
        Err(GalleryQueryError::ParentNotFound) => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };
    let primary = match query.primary_image(parent).await {
        Ok(primary) => primary,
        Err(GalleryQueryError::ParentNotFound) => None,
        Err(e) => return Err(e),
    };

    let urls: Vec<String> = primary
        .into_iter()
        .chain(rows.into_iter().map(|r| r.image_url))
        .collect();
    Ok(first_wins(urls, |u: &String| u.clone()))
}

/// Compares a parent's committed references against the object store.
///
/// `previous_urls` is the pre-image of a write; those the parent dropped
/// and nothing else references should be gone from the store. Never errors.
pub async fn audit_parent<Q, S>(
    query: &Q,
    store: &S,
    parent: &ParentRef,
    previous_urls: &[String],
) -> AuditReport
where
    Q: GalleryQuery + ?Sized,
    S: ObjectStore + ?Sized,
{
    let current = match current_urls(query, parent).await {
        Ok(urls) => urls,
        Err(e) => {
            warn!(parent = %parent, error = %e, "Audit could not read parent references");
            return AuditReport::incomplete();
        }
    };

    let mut dropped = Vec::new();
    for url in removed_urls(previous_urls.iter().cloned(), &current) {
        match query.count_references(&url).await {
            Ok(0) => dropped.push(url),
            Ok(_) => {}
            Err(e) => {
                warn!(url = %url, error = %e, "Audit reference count failed");
                return AuditReport::incomplete();
            }
        }
    }

    let current_presence = join_all(current.iter().map(|url| presence(store, url))).await;
    let dropped_presence = join_all(dropped.iter().map(|url| presence(store, url))).await;

    let mut report = AuditReport {
        missing_remote: Vec::new(),
        orphaned_remote: Vec::new(),
        unchecked: Vec::new(),
        complete: true,
    };

    for (url, presence) in current.into_iter().zip(current_presence) {
        match presence {
            Presence::Present => {}
            Presence::Missing => report.missing_remote.push(url),
            Presence::Unknown => report.unchecked.push(url),
        }
    }
    for (url, presence) in dropped.into_iter().zip(dropped_presence) {
        match presence {
            Presence::Present => report.orphaned_remote.push(url),
            Presence::Missing => {}
            Presence::Unknown => report.unchecked.push(url),
        }
    }

    if report.is_consistent() {
        info!(parent = %parent, unchecked = report.unchecked.len(), "Gallery audit clean");
    } else {
        warn!(
            parent = %parent,
            missing = ?report.missing_remote,
            orphaned = ?report.orphaned_remote,
            "Gallery and object store disagree"
        );
    }
    report
}
