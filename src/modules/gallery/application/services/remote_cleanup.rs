use futures::future::join_all;
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::cloud_storage::application::ports::outgoing::{ObjectStore, ObjectStoreError};
use crate::gallery::application::domain::{
    dedup::first_wins,
    outcome::{CleanupFailure, CleanupReport},
};
use crate::gallery::application::ports::outgoing::db::BlobReferences;

/// URLs in `previous` that `current` no longer holds, first-seen order.
pub fn removed_urls<I>(previous: I, current: &[String]) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let keep: HashSet<&str> = current.iter().map(String::as_str).collect();
    let dropped: Vec<String> = previous
        .into_iter()
        .filter(|url| !url.trim().is_empty() && !keep.contains(url.as_str()))
        .collect();

    first_wins(dropped, |url: &String| url.clone())
}

enum Attempt {
    Deleted(String),
    Retained(String),
    Failed(CleanupFailure),
}

async fn purge_one<R, S>(refs: &R, store: &S, url: String) -> Attempt
where
    R: BlobReferences + ?Sized,
    S: ObjectStore + ?Sized,
{
    match refs.count_references(&url).await {
        Ok(0) => {}
        Ok(count) => {
            debug!(url = %url, count, "Blob still referenced; keeping it");
            return Attempt::Retained(url);
        }
        Err(e) => {
            // Unknown reference count: never delete.
            return Attempt::Failed(CleanupFailure {
                reason: format!("reference check failed: {e}"),
                url,
            });
        }
    }

    match store.try_delete(&url).await {
        Ok(()) | Err(ObjectStoreError::NotFound) => Attempt::Deleted(url),
        Err(e) => Attempt::Failed(CleanupFailure {
            reason: e.to_string(),
            url,
        }),
    }
}

/// Post-commit removal of blobs no row points at any more.
///
/// Only call after the transaction that dropped the references committed.
/// Deletes run concurrently and fail independently; nothing here errors.
pub async fn purge_unreferenced<R, S>(refs: &R, store: &S, urls: Vec<String>) -> CleanupReport
where
    R: BlobReferences + ?Sized,
    S: ObjectStore + ?Sized,
{
    let mut report = CleanupReport::default();
    if urls.is_empty() {
        return report;
    }

    let attempts = join_all(urls.into_iter().map(|url| purge_one(refs, store, url))).await;

    for attempt in attempts {
        match attempt {
            Attempt::Deleted(url) => report.deleted.push(url),
            Attempt::Retained(url) => report.retained.push(url),
            Attempt::Failed(failure) => {
                warn!(url = %failure.url, reason = %failure.reason, "Remote cleanup failed");
                report.failures.push(failure);
            }
        }
    }

    info!(
        deleted = report.deleted.len(),
        retained = report.retained.len(),
        failed = report.failures.len(),
        "Remote cleanup finished"
    );
    report
}
