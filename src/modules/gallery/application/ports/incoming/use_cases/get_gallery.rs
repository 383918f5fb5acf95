use async_trait::async_trait;

use crate::gallery::application::domain::entities::{GalleryItem, ParentRef};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetGalleryError {
    #[error("Parent not found")]
    ParentNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetGalleryUseCase: Send + Sync {
    async fn execute(&self, parent: ParentRef) -> Result<Vec<GalleryItem>, GetGalleryError>;
}
