use async_trait::async_trait;

use crate::gallery::application::domain::{
    entities::ParentType, gallery_entry::GalleryDraft, outcome::GalleryWriteOutcome,
    parent_fields::ParentFields,
};

use super::GalleryWriteError;

#[derive(Debug, Clone)]
pub struct CreateParentCommand {
    pub parent_type: ParentType,
    pub fields: ParentFields,
    pub draft: GalleryDraft,
}

#[async_trait]
pub trait CreateParentWithGalleryUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateParentCommand,
    ) -> Result<GalleryWriteOutcome, GalleryWriteError>;
}
