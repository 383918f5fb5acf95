use async_trait::async_trait;

use crate::gallery::application::domain::entities::{
    GalleryItem, Page, ParentCover, ParentRef, ParentType,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryQueryError {
    #[error("Parent not found")]
    ParentNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// How many rows anywhere still point at a blob URL.
#[async_trait]
pub trait BlobReferences: Send + Sync {
    async fn count_references(&self, image_url: &str) -> Result<u64, GalleryQueryError>;
}

/// Committed-state reads, outside any write transaction.
#[async_trait]
pub trait GalleryQuery: BlobReferences {
    async fn list_ordered(&self, parent: &ParentRef) -> Result<Vec<GalleryItem>, GalleryQueryError>;

    async fn primary_image(&self, parent: &ParentRef) -> Result<Option<String>, GalleryQueryError>;

    /// One row per parent joined to its lowest-ordered gallery row.
    async fn list_covers(
        &self,
        parent_type: ParentType,
        page: Page,
    ) -> Result<Vec<ParentCover>, GalleryQueryError>;
}
