use async_trait::async_trait;

use crate::gallery::application::domain::{entities::ParentRef, outcome::GalleryWriteOutcome};

use super::GalleryWriteError;

#[async_trait]
pub trait DeleteParentCascadingGalleryUseCase: Send + Sync {
    async fn execute(&self, parent: ParentRef) -> Result<GalleryWriteOutcome, GalleryWriteError>;
}
