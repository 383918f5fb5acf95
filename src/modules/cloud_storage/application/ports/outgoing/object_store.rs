use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::cloud_storage::application::domain::entities::{
    FileDownload, FileListPage, FileListQuery, FileMetadata, StoredFile, UploadRequest,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectStoreError {
    /// Transport failure, 5xx or timeout.
    #[error("object store unavailable: {0}")]
    StoreUnavailable(String),

    /// 401 / 403
    #[error("object store rejected credentials: {0}")]
    AuthError(String),

    #[error("object store rate limit exceeded")]
    RateLimited,

    #[error("object store refused duplicate upload: {0}")]
    DuplicateRejected(String),

    #[error("file not found in object store")]
    NotFound,

    #[error("cannot resolve a file id from locator: {0}")]
    InvalidLocator(String),

    #[error("unexpected object store response: {0}")]
    InvalidResponse(String),
}

/// Remote blob store the gallery writes through.
///
/// Uploads are not idempotent: every call creates a new blob.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn upload(&self, request: UploadRequest) -> Result<StoredFile, ObjectStoreError>;

    async fn get_metadata(&self, file_id: &str) -> Result<FileMetadata, ObjectStoreError>;

    async fn list(&self, query: FileListQuery) -> Result<FileListPage, ObjectStoreError>;

    /// Public read of the blob behind `file_id`. An empty blob is `NotFound`.
    async fn download(&self, file_id: &str) -> Result<FileDownload, ObjectStoreError>;

    /// Deletes by store id or by any URL/path that carries one.
    async fn try_delete(&self, locator: &str) -> Result<(), ObjectStoreError>;

    /// Best-effort variant of [`try_delete`](Self::try_delete): failures are
    /// logged and reported as `false`.
    async fn delete(&self, locator: &str) -> bool {
        match self.try_delete(locator).await {
            Ok(()) => true,
            Err(e) => {
                warn!(locator, error = %e, "Object store delete failed");
                false
            }
        }
    }
}
